use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::vocab::CLASS_NAMES;

/// Seniority tier of an IT specialist — the target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Middle,
    Senior,
}

impl Seniority {
    pub const ALL: [Seniority; 3] = [Seniority::Junior, Seniority::Middle, Seniority::Senior];

    /// Encoding used in the label vector (junior=0, middle=1, senior=2).
    pub fn index(self) -> usize {
        match self {
            Seniority::Junior => 0,
            Seniority::Middle => 1,
            Seniority::Senior => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        CLASS_NAMES[self.index()]
    }
}

/// Frozen dataset handed to the training stage: feature matrix, encoded
/// label vector and the names describing both axes.
///
/// Invariants: `x.nrows() == y.len()`, `x.ncols() == feature_names.len()`,
/// every label is `< class_names.len()`.
#[derive(Debug, Clone)]
pub struct ProcessedData {
    pub x: Array2<f64>,
    pub y: Array1<usize>,
    pub feature_names: Vec<String>,
    pub class_names: Vec<&'static str>,
}

impl ProcessedData {
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_encoding_matches_class_names() {
        for tier in Seniority::ALL {
            assert_eq!(CLASS_NAMES[tier.index()], tier.as_str());
        }
    }

    #[test]
    fn test_seniority_serializes_lowercase() {
        let json = serde_json::to_string(&Seniority::Junior).unwrap();
        assert_eq!(json, r#""junior""#);
    }
}
