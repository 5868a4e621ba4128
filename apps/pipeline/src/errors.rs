use thiserror::Error;

/// Pipeline-level error type. Field parsers never produce errors — a value
/// that cannot be extracted is `None`, not a failure. Only structural
/// problems (bad input schema, too little data, misuse of a model) surface
/// here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("required column '{0}' not found in the input CSV")]
    MissingColumn(String),

    #[error("no IT developer resumes left after filtering")]
    NoDevelopersFound,

    #[error("not enough samples after processing: kept {kept}, need at least {required}")]
    InsufficientSamples { kept: usize, required: usize },

    #[error("unknown model '{name}'; available: {available}")]
    UnknownModel { name: String, available: String },

    #[error("model '{0}' is not fitted; call fit() before predicting")]
    NotFitted(&'static str),

    #[error("dimension mismatch: x has {x_rows} samples, y has {y_rows}")]
    DimensionMismatch { x_rows: usize, y_rows: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
