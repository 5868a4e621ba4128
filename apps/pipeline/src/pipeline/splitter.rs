//! Seeded stratified train/test split.

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::classifier::check_dimensions;
use crate::errors::PipelineError;

#[derive(Debug, Clone)]
pub struct SplitData {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
}

/// Splits the dataset, keeping the class proportions in both halves.
///
/// Indices are grouped per class, shuffled with a seeded RNG and the
/// `test_size` fraction of each class (at least one row per multi-row
/// class) goes to the test half. The same seed always produces the same
/// split.
pub fn stratified_split(
    x: &Array2<f64>,
    y: &Array1<usize>,
    test_size: f64,
    seed: u64,
) -> Result<SplitData, PipelineError> {
    check_dimensions(x.view(), y.view())?;

    let n_classes = y.iter().copied().max().map_or(0, |max| max + 1);
    let mut by_class: Vec<Vec<usize>> = vec![Vec::new(); n_classes];
    for (index, &label) in y.iter().enumerate() {
        by_class[label].push(index);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::new();
    let mut test_indices = Vec::new();

    for mut indices in by_class {
        indices.shuffle(&mut rng);
        let n_test = if indices.len() > 1 {
            (((indices.len() as f64) * test_size).round() as usize).max(1)
        } else {
            0
        };
        let (test, train) = indices.split_at(n_test.min(indices.len()));
        test_indices.extend_from_slice(test);
        train_indices.extend_from_slice(train);
    }

    // keep the original row order within each half
    train_indices.sort_unstable();
    test_indices.sort_unstable();

    info!(
        train = train_indices.len(),
        test = test_indices.len(),
        "dataset split"
    );

    Ok(SplitData {
        x_train: x.select(Axis(0), &train_indices),
        x_test: x.select(Axis(0), &test_indices),
        y_train: y.select(Axis(0), &train_indices),
        y_test: y.select(Axis(0), &test_indices),
    })
}
