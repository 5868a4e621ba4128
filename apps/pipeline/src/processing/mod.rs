pub mod features;
pub mod filter;
pub mod parsers;
pub mod processor;
pub mod target;

pub use processor::process_records;
