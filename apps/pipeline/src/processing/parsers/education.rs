use crate::vocab::{DEFAULT_EDUCATION_RANK, EDUCATION_LEVELS};

/// Determines the education rank (0–3) of a résumé.
///
/// Levels are scanned in vocabulary order and the first keyword found in
/// the lowercased text wins. Text matching no keyword falls back to the
/// highest rank — this is deliberate, not a missing-value case; `None` is
/// returned only for a missing field.
pub fn parse_education(text: Option<&str>) -> Option<f64> {
    let lower = text?.to_lowercase();

    for (keyword, rank) in EDUCATION_LEVELS {
        if lower.contains(keyword) {
            return Some(f64::from(*rank));
        }
    }

    Some(f64::from(DEFAULT_EDUCATION_RANK))
}
