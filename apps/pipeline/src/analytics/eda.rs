//! Exploratory summary of the label distribution, logged before training.

use ndarray::ArrayView1;
use serde::Serialize;
use tracing::info;

/// Classes whose count ratio stays under this are considered balanced.
const BALANCE_THRESHOLD: f64 = 1.5;

#[derive(Debug, Clone, Serialize)]
pub struct ClassBalance {
    /// `(class name, count, percentage)` in class encoding order.
    pub per_class: Vec<(String, usize, f64)>,
    /// Largest class count over smallest; infinite when a class is empty.
    pub imbalance_ratio: f64,
    pub is_balanced: bool,
}

pub fn analyze_class_balance(y: ArrayView1<usize>, class_names: &[&str]) -> ClassBalance {
    let mut counts = vec![0usize; class_names.len()];
    for &label in y {
        if let Some(count) = counts.get_mut(label) {
            *count += 1;
        }
    }

    let total = y.len().max(1) as f64;
    let per_class = class_names
        .iter()
        .zip(&counts)
        .map(|(name, &count)| ((*name).to_string(), count, 100.0 * count as f64 / total))
        .collect();

    let max = counts.iter().copied().max().unwrap_or(0);
    let min = counts.iter().copied().min().unwrap_or(0);
    let imbalance_ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };

    ClassBalance {
        per_class,
        imbalance_ratio,
        is_balanced: imbalance_ratio <= BALANCE_THRESHOLD,
    }
}

pub fn log_class_balance(balance: &ClassBalance) {
    info!("class distribution:");
    for (name, count, pct) in &balance.per_class {
        info!("  {name}: {count} ({pct:.1}%)");
    }
    info!(
        imbalance_ratio = balance.imbalance_ratio,
        balanced = balance.is_balanced,
        "class balance"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const CLASSES: [&str; 3] = ["junior", "middle", "senior"];

    #[test]
    fn test_counts_and_percentages() {
        let y = array![0usize, 0, 1, 2];
        let balance = analyze_class_balance(y.view(), &CLASSES);
        assert_eq!(balance.per_class[0], ("junior".to_string(), 2, 50.0));
        assert_eq!(balance.per_class[1].1, 1);
        assert_eq!(balance.per_class[2].1, 1);
    }

    #[test]
    fn test_balanced_distribution() {
        let y = array![0usize, 1, 2, 0, 1, 2];
        let balance = analyze_class_balance(y.view(), &CLASSES);
        assert_eq!(balance.imbalance_ratio, 1.0);
        assert!(balance.is_balanced);
    }

    #[test]
    fn test_imbalanced_distribution() {
        let y = array![0usize, 0, 0, 0, 1, 2];
        let balance = analyze_class_balance(y.view(), &CLASSES);
        assert_eq!(balance.imbalance_ratio, 4.0);
        assert!(!balance.is_balanced);
    }

    #[test]
    fn test_empty_class_is_infinite_ratio() {
        let y = array![0usize, 0, 1];
        let balance = analyze_class_balance(y.view(), &CLASSES);
        assert!(balance.imbalance_ratio.is_infinite());
        assert!(!balance.is_balanced);
    }
}
