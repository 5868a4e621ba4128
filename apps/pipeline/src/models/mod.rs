pub mod dataset;
pub mod record;

pub use dataset::{ProcessedData, Seniority};
pub use record::ResumeRecord;
