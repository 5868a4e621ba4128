pub mod eda;
pub mod evaluation;

pub use eda::analyze_class_balance;
pub use evaluation::{evaluate_classifier, write_metrics_json, ClassificationMetrics};
