//! Classification quality metrics: confusion matrix, accuracy and
//! macro-averaged precision/recall/F1, plus a plain-text per-class report.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use ndarray::ArrayView1;
use serde::Serialize;

use crate::errors::PipelineError;

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision_macro: f64,
    pub recall_macro: f64,
    pub f1_macro: f64,
    /// `confusion[true_class][predicted_class]`.
    pub confusion: Vec<Vec<usize>>,
    pub report: String,
}

/// Serialized shape of a `<model>_metrics.json` file.
#[derive(Debug, Serialize)]
struct MetricsFile<'a> {
    model_name: &'a str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    metrics: &'a ClassificationMetrics,
}

/// Computes all metrics for one prediction run. Degenerate denominators
/// (a class never predicted, or absent from `y_true`) contribute 0, not
/// NaN, to the macro averages.
pub fn evaluate_classifier(
    y_true: ArrayView1<usize>,
    y_pred: ArrayView1<usize>,
    class_names: &[&str],
) -> ClassificationMetrics {
    let n_classes = class_names.len();
    let mut confusion = vec![vec![0usize; n_classes]; n_classes];
    let mut correct = 0usize;

    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        if truth < n_classes && pred < n_classes {
            confusion[truth][pred] += 1;
        }
        if truth == pred {
            correct += 1;
        }
    }

    let total = y_true.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };

    let mut precisions = Vec::with_capacity(n_classes);
    let mut recalls = Vec::with_capacity(n_classes);
    let mut f1s = Vec::with_capacity(n_classes);
    let mut supports = Vec::with_capacity(n_classes);

    for class in 0..n_classes {
        let tp = confusion[class][class];
        let predicted: usize = (0..n_classes).map(|t| confusion[t][class]).sum();
        let actual: usize = confusion[class].iter().sum();

        let precision = ratio(tp, predicted);
        let recall = ratio(tp, actual);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        precisions.push(precision);
        recalls.push(recall);
        f1s.push(f1);
        supports.push(actual);
    }

    let report = render_report(class_names, &precisions, &recalls, &f1s, &supports);

    ClassificationMetrics {
        accuracy,
        precision_macro: mean(&precisions),
        recall_macro: mean(&recalls),
        f1_macro: mean(&f1s),
        confusion,
        report,
    }
}

/// Writes the metrics for one model as JSON and returns the file path.
pub fn write_metrics_json(
    metrics: &ClassificationMetrics,
    model_name: &str,
    metrics_dir: &Path,
) -> Result<PathBuf, PipelineError> {
    let file = MetricsFile {
        model_name,
        generated_at: Utc::now(),
        metrics,
    };
    let path = metrics_dir.join(format!("{model_name}_metrics.json"));
    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn render_report(
    class_names: &[&str],
    precisions: &[f64],
    recalls: &[f64],
    f1s: &[f64],
    supports: &[usize],
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>12}  {:>9}  {:>9}  {:>9}  {:>7}",
        "", "precision", "recall", "f1-score", "support"
    );
    for (i, name) in class_names.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>12}  {:>9.2}  {:>9.2}  {:>9.2}  {:>7}",
            name, precisions[i], recalls[i], f1s[i], supports[i]
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const CLASSES: [&str; 3] = ["junior", "middle", "senior"];

    #[test]
    fn test_perfect_predictions() {
        let y = array![0usize, 1, 2, 1];
        let metrics = evaluate_classifier(y.view(), y.view(), &CLASSES);
        assert_eq!(metrics.accuracy, 1.0);
        assert_eq!(metrics.precision_macro, 1.0);
        assert_eq!(metrics.recall_macro, 1.0);
        assert_eq!(metrics.f1_macro, 1.0);
    }

    #[test]
    fn test_confusion_matrix_layout() {
        let y_true = array![0usize, 0, 1];
        let y_pred = array![0usize, 1, 1];
        let metrics = evaluate_classifier(y_true.view(), y_pred.view(), &CLASSES);
        assert_eq!(metrics.confusion[0][0], 1); // junior as junior
        assert_eq!(metrics.confusion[0][1], 1); // junior as middle
        assert_eq!(metrics.confusion[1][1], 1); // middle as middle
    }

    #[test]
    fn test_accuracy_partial() {
        let y_true = array![0usize, 1, 2, 2];
        let y_pred = array![0usize, 1, 1, 1];
        let metrics = evaluate_classifier(y_true.view(), y_pred.view(), &CLASSES);
        assert_eq!(metrics.accuracy, 0.5);
    }

    #[test]
    fn test_never_predicted_class_contributes_zero() {
        // senior never predicted: its precision and f1 are 0, not NaN
        let y_true = array![2usize, 2, 0];
        let y_pred = array![0usize, 0, 0];
        let metrics = evaluate_classifier(y_true.view(), y_pred.view(), &CLASSES);
        assert!(metrics.f1_macro.is_finite());
        assert!(metrics.precision_macro.is_finite());
    }

    #[test]
    fn test_report_lists_all_classes() {
        let y = array![0usize, 1, 2];
        let metrics = evaluate_classifier(y.view(), y.view(), &CLASSES);
        for name in CLASSES {
            assert!(metrics.report.contains(name));
        }
    }

    #[test]
    fn test_metrics_json_roundtrip() {
        let y = array![0usize, 1, 2];
        let metrics = evaluate_classifier(y.view(), y.view(), &CLASSES);
        let dir = std::env::temp_dir();
        let path = write_metrics_json(&metrics, "majority", &dir).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["model_name"], "majority");
        assert_eq!(value["accuracy"], 1.0);
        let _ = std::fs::remove_file(path);
    }
}
