//! CSV ingestion: raw job-board export → typed résumé rows.

use std::path::Path;

use tracing::info;

use crate::errors::PipelineError;
use crate::models::record::CSV_COLUMNS;
use crate::models::ResumeRecord;

/// Reads the résumé export. Every expected source column must be present
/// in the header; a missing one is a configuration error and aborts before
/// any row is parsed. Blank cells become `None`.
pub fn load_records(path: &Path) -> Result<Vec<ResumeRecord>, PipelineError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in CSV_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(PipelineError::MissingColumn(column.to_string()));
        }
    }

    let records = reader
        .deserialize()
        .collect::<Result<Vec<ResumeRecord>, _>>()?;

    info!(rows = records.len(), path = %path.display(), "resume CSV loaded");
    Ok(records)
}
