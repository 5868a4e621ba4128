use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::{check_dimensions, n_classes, SeniorityModel};
use crate::errors::PipelineError;

/// Baseline model: always predicts the most frequent training class.
/// `predict_proba` returns the training class frequencies for every row.
#[derive(Debug, Default)]
pub struct MajorityModel {
    class_counts: Option<Vec<usize>>,
}

impl MajorityModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn fitted_counts(&self) -> Result<&[usize], PipelineError> {
        self.class_counts
            .as_deref()
            .ok_or(PipelineError::NotFitted("majority"))
    }

    /// Index of the largest count; earlier class wins ties.
    fn majority_class(counts: &[usize]) -> usize {
        let mut best = 0;
        for (class, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = class;
            }
        }
        best
    }
}

impl SeniorityModel for MajorityModel {
    fn name(&self) -> &'static str {
        "majority"
    }

    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<usize>) -> Result<(), PipelineError> {
        check_dimensions(x, y)?;
        let mut counts = vec![0usize; n_classes()];
        for &label in y {
            if let Some(count) = counts.get_mut(label) {
                *count += 1;
            }
        }
        self.class_counts = Some(counts);
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<usize>, PipelineError> {
        let counts = self.fitted_counts()?;
        let majority = Self::majority_class(counts);
        Ok(Array1::from_elem(x.nrows(), majority))
    }

    fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, PipelineError> {
        let counts = self.fitted_counts()?;
        let total: usize = counts.iter().sum();
        let frequencies: Vec<f64> = counts
            .iter()
            .map(|&count| {
                if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                }
            })
            .collect();

        let mut proba = Array2::zeros((x.nrows(), counts.len()));
        for mut row in proba.rows_mut() {
            for (cell, &freq) in row.iter_mut().zip(&frequencies) {
                *cell = freq;
            }
        }
        Ok(proba)
    }
}
