use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::{check_dimensions, n_classes, SeniorityModel};
use crate::errors::PipelineError;

/// Guard against division by ~zero distances in the probability weights.
const DISTANCE_EPSILON: f64 = 1e-9;

/// Nearest-centroid model over z-scored features.
///
/// `fit` learns per-feature mean/std from the training matrix and one
/// centroid per class in standardized space; `predict` assigns each row to
/// the closest centroid. Probabilities are normalized inverse distances —
/// a rough confidence signal, not calibrated.
#[derive(Debug, Default)]
pub struct CentroidModel {
    state: Option<Fitted>,
}

#[derive(Debug)]
struct Fitted {
    means: Array1<f64>,
    stds: Array1<f64>,
    /// One centroid per class; `None` for classes absent from training.
    centroids: Vec<Option<Array1<f64>>>,
}

impl CentroidModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn fitted(&self) -> Result<&Fitted, PipelineError> {
        self.state.as_ref().ok_or(PipelineError::NotFitted("centroid"))
    }
}

impl Fitted {
    fn standardize(&self, row: ArrayView1<f64>) -> Array1<f64> {
        (&row - &self.means) / &self.stds
    }

    /// Euclidean distance from the standardized row to every present
    /// centroid.
    fn distances(&self, row: ArrayView1<f64>) -> Vec<Option<f64>> {
        let z = self.standardize(row);
        self.centroids
            .iter()
            .map(|centroid| {
                centroid.as_ref().map(|c| {
                    (&z - c).iter().map(|d| d * d).sum::<f64>().sqrt()
                })
            })
            .collect()
    }

    fn nearest_class(&self, row: ArrayView1<f64>) -> usize {
        let mut best_class = 0;
        let mut best_distance = f64::INFINITY;
        for (class, distance) in self.distances(row).into_iter().enumerate() {
            if let Some(distance) = distance {
                if distance < best_distance {
                    best_distance = distance;
                    best_class = class;
                }
            }
        }
        best_class
    }
}

impl SeniorityModel for CentroidModel {
    fn name(&self) -> &'static str {
        "centroid"
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<usize>) -> Result<(), PipelineError> {
        check_dimensions(x, y)?;

        let n = x.nrows().max(1) as f64;
        let means = x.sum_axis(ndarray::Axis(0)) / n;
        let mut stds: Array1<f64> = Array1::zeros(x.ncols());
        for row in x.rows() {
            let delta = &row - &means;
            stds = stds + delta.mapv(|d| d * d);
        }
        // constant features get std 1.0 so standardization is a no-op there
        let stds = stds.mapv(|s| {
            let std = (s / n).sqrt();
            if std > 0.0 {
                std
            } else {
                1.0
            }
        });

        let mut sums: Vec<Array1<f64>> = vec![Array1::zeros(x.ncols()); n_classes()];
        let mut counts = vec![0usize; n_classes()];
        for (row, &label) in x.rows().into_iter().zip(y) {
            if label < counts.len() {
                let z = (&row - &means) / &stds;
                sums[label] += &z;
                counts[label] += 1;
            }
        }

        let centroids = sums
            .into_iter()
            .zip(&counts)
            .map(|(sum, &count)| (count > 0).then(|| sum / count as f64))
            .collect();

        self.state = Some(Fitted {
            means,
            stds,
            centroids,
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<usize>, PipelineError> {
        let fitted = self.fitted()?;
        Ok(x.rows()
            .into_iter()
            .map(|row| fitted.nearest_class(row))
            .collect())
    }

    fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, PipelineError> {
        let fitted = self.fitted()?;
        let mut proba = Array2::zeros((x.nrows(), fitted.centroids.len()));

        for (i, row) in x.rows().into_iter().enumerate() {
            let weights: Vec<f64> = fitted
                .distances(row)
                .into_iter()
                .map(|distance| match distance {
                    Some(d) => 1.0 / (d + DISTANCE_EPSILON),
                    None => 0.0,
                })
                .collect();
            let total: f64 = weights.iter().sum();
            if total > 0.0 {
                for (j, weight) in weights.iter().enumerate() {
                    proba[(i, j)] = weight / total;
                }
            }
        }
        Ok(proba)
    }
}
