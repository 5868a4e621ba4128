//! Model layer: a small capability contract plus an explicit name→factory
//! registry, built once at startup and passed by reference. No global
//! mutable state and no inheritance — concrete models are independent
//! types behind `dyn SeniorityModel`.

pub mod centroid;
pub mod majority;

use std::collections::BTreeMap;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::errors::PipelineError;
use crate::vocab::CLASS_NAMES;

pub use centroid::CentroidModel;
pub use majority::MajorityModel;

/// Capability contract every seniority model implements.
pub trait SeniorityModel {
    fn name(&self) -> &'static str;

    /// Trains on the given matrix/labels. Labels are class indices
    /// (`0..CLASS_NAMES.len()`).
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<usize>) -> Result<(), PipelineError>;

    /// Predicts a class index per row. Errors when the model is unfitted.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<usize>, PipelineError>;

    /// Per-class probability estimates, rows summing to 1.
    fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, PipelineError>;
}

pub type ModelFactory = fn() -> Box<dyn SeniorityModel>;

/// Explicit mapping from model identifier to constructor.
pub struct ModelRegistry {
    factories: BTreeMap<&'static str, ModelFactory>,
}

impl ModelRegistry {
    /// Registry with all models this binary ships.
    pub fn with_default_models() -> Self {
        let mut factories: BTreeMap<&'static str, ModelFactory> = BTreeMap::new();
        factories.insert("majority", || Box::new(MajorityModel::new()));
        factories.insert("centroid", || Box::new(CentroidModel::new()));
        Self { factories }
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn SeniorityModel>, PipelineError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| PipelineError::UnknownModel {
                name: name.to_string(),
                available: self.available().join(", "),
            })
    }

    pub fn available(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

pub(crate) fn n_classes() -> usize {
    CLASS_NAMES.len()
}

/// Shared fit precondition: x and y must agree on the sample count.
pub(crate) fn check_dimensions(
    x: ArrayView2<f64>,
    y: ArrayView1<usize>,
) -> Result<(), PipelineError> {
    if x.nrows() != y.len() {
        return Err(PipelineError::DimensionMismatch {
            x_rows: x.nrows(),
            y_rows: y.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_registry_lists_models_sorted() {
        let registry = ModelRegistry::with_default_models();
        assert_eq!(registry.available(), vec!["centroid", "majority"]);
    }

    #[test]
    fn test_registry_creates_model() {
        let registry = ModelRegistry::with_default_models();
        let model = registry.create("majority").unwrap();
        assert_eq!(model.name(), "majority");
    }

    #[test]
    fn test_unknown_model_error_names_alternatives() {
        let registry = ModelRegistry::with_default_models();
        let err = registry.create("svm").err().unwrap();
        let message = err.to_string();
        assert!(message.contains("svm"));
        assert!(message.contains("centroid"));
    }

    #[test]
    fn test_dimension_check() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![0usize];
        assert!(check_dimensions(x.view(), y.view()).is_err());
    }
}
