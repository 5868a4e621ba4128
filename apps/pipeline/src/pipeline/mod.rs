pub mod loader;
pub mod splitter;
pub mod summary;
pub mod trainer;
