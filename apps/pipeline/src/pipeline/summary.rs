//! Final run summary: models ranked by macro F1.

use tracing::info;

use crate::analytics::ClassificationMetrics;

pub fn log_summary(results: &[(String, ClassificationMetrics)]) {
    info!("evaluated {} model(s); ranking by macro F1:", results.len());

    let mut ranked: Vec<&(String, ClassificationMetrics)> = results.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.f1_macro
            .partial_cmp(&a.1.f1_macro)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (rank, (name, metrics)) in ranked.iter().enumerate() {
        info!(
            "  {}. {:<12} F1: {:.4}  accuracy: {:.4}",
            rank + 1,
            name,
            metrics.f1_macro,
            metrics.accuracy
        );
    }
}
