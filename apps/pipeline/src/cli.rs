use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for one pipeline run.
#[derive(Debug, Parser)]
#[command(
    name = "seniority-pipeline",
    about = "Classifies IT resumes from a job-board CSV export into junior/middle/senior tiers"
)]
pub struct Args {
    /// Path to the resume CSV export.
    #[arg(long)]
    pub csv: PathBuf,

    /// Models to train and evaluate.
    #[arg(long, num_args = 1.., default_values_t = ["majority".to_string(), "centroid".to_string()])]
    pub models: Vec<String>,

    /// Fraction of each class held out for testing.
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// RNG seed for the train/test split.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["seniority-pipeline", "--csv", "resumes.csv"]);
        assert_eq!(args.csv, PathBuf::from("resumes.csv"));
        assert_eq!(args.models, vec!["majority", "centroid"]);
        assert_eq!(args.test_size, 0.2);
        assert_eq!(args.seed, 42);
    }

    #[test]
    fn test_model_list_override() {
        let args = Args::parse_from([
            "seniority-pipeline",
            "--csv",
            "resumes.csv",
            "--models",
            "centroid",
        ]);
        assert_eq!(args.models, vec!["centroid"]);
    }

    #[test]
    fn test_csv_is_required() {
        assert!(Args::try_parse_from(["seniority-pipeline"]).is_err());
    }
}
