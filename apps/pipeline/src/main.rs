mod analytics;
mod classifier;
mod cli;
mod config;
mod errors;
mod models;
mod pipeline;
mod processing;
mod vocab;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analytics::{evaluate_classifier, write_metrics_json};
use crate::classifier::ModelRegistry;
use crate::config::Config;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seniority pipeline v{}", env!("CARGO_PKG_VERSION"));

    // Stage 1: load and process the CSV into a frozen dataset
    let records = pipeline::loader::load_records(&args.csv)?;
    let data = processing::process_records(&records)?;
    info!(
        samples = data.n_samples(),
        features = data.n_features(),
        "dataset ready"
    );

    // Stage 2: label distribution overview
    let balance = analytics::analyze_class_balance(data.y.view(), &data.class_names);
    analytics::eda::log_class_balance(&balance);

    // Stage 3: train/test split
    let split = pipeline::splitter::stratified_split(&data.x, &data.y, args.test_size, args.seed)?;

    // Stage 4: training
    let registry = ModelRegistry::with_default_models();
    let trained = pipeline::trainer::train_models(
        &args.models,
        &registry,
        split.x_train.view(),
        split.y_train.view(),
    );
    if trained.is_empty() {
        anyhow::bail!(
            "no model could be trained; available models: {}",
            registry.available().join(", ")
        );
    }

    // Stage 5: evaluation
    let mut results = Vec::new();
    for model in &trained {
        let y_pred = model.predict(split.x_test.view())?;
        let metrics = evaluate_classifier(split.y_test.view(), y_pred.view(), &data.class_names);
        info!(
            model = model.name(),
            accuracy = metrics.accuracy,
            f1_macro = metrics.f1_macro,
            "model evaluated"
        );
        info!("classification report for '{}':\n{}", model.name(), metrics.report);

        let path = write_metrics_json(&metrics, model.name(), &config.metrics_dir)?;
        info!("metrics saved: {}", path.display());

        results.push((model.name().to_string(), metrics));
    }

    pipeline::summary::log_summary(&results);
    Ok(())
}
