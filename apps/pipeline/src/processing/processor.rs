//! End-to-end record processing: filter → parse → label → drop incomplete
//! rows → frozen dataset.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::errors::PipelineError;
use crate::models::{ProcessedData, ResumeRecord};
use crate::processing::features::{extract_features, feature_names};
use crate::processing::filter::filter_developers;
use crate::processing::target::label_records;
use crate::vocab::{CLASS_NAMES, MIN_SAMPLES};

/// Turns raw résumé rows into a training-ready dataset.
///
/// Rows with any undetermined required feature or an undetermined label are
/// dropped here, after assembly, so the per-row parse results stay
/// auditable up to this point. Fails when no developers survive the filter
/// or fewer than [`MIN_SAMPLES`] rows survive the drop.
pub fn process_records(records: &[ResumeRecord]) -> Result<ProcessedData, PipelineError> {
    let developers = filter_developers(records);
    if developers.is_empty() {
        return Err(PipelineError::NoDevelopersFound);
    }
    debug!(
        total = records.len(),
        developers = developers.len(),
        "developer filter applied"
    );

    let features = extract_features(&developers);
    let labels = label_records(&developers);

    let mut rows: Vec<f64> = Vec::new();
    let mut y: Vec<usize> = Vec::new();
    for (parsed, label) in features.iter().zip(&labels) {
        if let (Some(row), Some(tier)) = (parsed.dense_row(), label) {
            rows.extend(row);
            y.push(tier.index());
        }
    }

    if y.len() < MIN_SAMPLES {
        return Err(PipelineError::InsufficientSamples {
            kept: y.len(),
            required: MIN_SAMPLES,
        });
    }
    debug!(kept = y.len(), dropped = developers.len() - y.len(), "incomplete rows dropped");

    let feature_names = feature_names();
    let x = Array2::from_shape_vec((y.len(), feature_names.len()), rows)?;

    Ok(ProcessedData {
        x,
        y: Array1::from_vec(y),
        feature_names,
        class_names: CLASS_NAMES.to_vec(),
    })
}
