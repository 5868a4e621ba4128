//! Training stage: instantiates requested models from the registry and
//! fits them. A model that cannot be created or fitted is logged and
//! skipped so the remaining models still run.

use ndarray::{ArrayView1, ArrayView2};
use tracing::{error, info};

use crate::classifier::{ModelRegistry, SeniorityModel};

pub fn train_models(
    names: &[String],
    registry: &ModelRegistry,
    x_train: ArrayView2<f64>,
    y_train: ArrayView1<usize>,
) -> Vec<Box<dyn SeniorityModel>> {
    let mut trained = Vec::new();

    for name in names {
        let mut model = match registry.create(name) {
            Ok(model) => model,
            Err(err) => {
                error!("skipping model '{name}': {err}");
                continue;
            }
        };

        match model.fit(x_train, y_train) {
            Ok(()) => {
                info!("model '{name}' trained");
                trained.push(model);
            }
            Err(err) => error!("training failed for '{name}': {err}"),
        }
    }

    trained
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn train_set() -> (Array2<f64>, ndarray::Array1<usize>) {
        (Array2::zeros((4, 2)), array![0usize, 1, 1, 2])
    }

    #[test]
    fn test_trains_requested_models() {
        let registry = ModelRegistry::with_default_models();
        let (x, y) = train_set();
        let trained = train_models(
            &["majority".to_string(), "centroid".to_string()],
            &registry,
            x.view(),
            y.view(),
        );
        assert_eq!(trained.len(), 2);
        assert_eq!(trained[0].name(), "majority");
        assert_eq!(trained[1].name(), "centroid");
    }

    #[test]
    fn test_unknown_model_skipped_not_fatal() {
        let registry = ModelRegistry::with_default_models();
        let (x, y) = train_set();
        let trained = train_models(
            &["svm".to_string(), "majority".to_string()],
            &registry,
            x.view(),
            y.view(),
        );
        assert_eq!(trained.len(), 1);
        assert_eq!(trained[0].name(), "majority");
    }
}
