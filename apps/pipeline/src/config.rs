use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment-driven configuration. Everything has a sensible local
/// default; a `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the per-model metrics JSON files are written into.
    pub metrics_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let metrics_dir = PathBuf::from(
            std::env::var("METRICS_DIR").unwrap_or_else(|_| "metrics".to_string()),
        );
        std::fs::create_dir_all(&metrics_dir)
            .with_context(|| format!("cannot create metrics dir '{}'", metrics_dir.display()))?;

        Ok(Config {
            metrics_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
