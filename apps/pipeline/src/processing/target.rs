//! Target labeling: assigns a seniority tier to each filtered row.

use crate::models::{ResumeRecord, Seniority};
use crate::processing::parsers::parse_experience;
use crate::vocab::{
    JUNIOR_KEYWORDS, JUNIOR_MAX_EXPERIENCE_MONTHS, MIDDLE_KEYWORDS, MIDDLE_MAX_EXPERIENCE_MONTHS,
    SENIOR_KEYWORDS,
};

/// Tier keyword sets in evaluation order. Junior is checked first, so a
/// title matching several tiers resolves to the lowest one. That tie-break
/// is specified behavior; do not reorder without confirming intent.
const TIER_KEYWORDS: [(Seniority, &[&str]); 3] = [
    (Seniority::Junior, JUNIOR_KEYWORDS),
    (Seniority::Middle, MIDDLE_KEYWORDS),
    (Seniority::Senior, SENIOR_KEYWORDS),
];

/// Labels every row. `None` marks a row whose tier cannot be determined;
/// such rows are dropped later, together with feature-incomplete ones.
/// Output is row-aligned with the input.
pub fn label_records(records: &[ResumeRecord]) -> Vec<Option<Seniority>> {
    records.iter().map(label_record).collect()
}

/// Two-tier heuristic, first match wins:
/// 1. a tier keyword found in the lowercased title decides immediately;
/// 2. otherwise the parsed experience decides by threshold
///    (< 24 months junior, < 60 middle, else senior).
fn label_record(record: &ResumeRecord) -> Option<Seniority> {
    let title = record.title().unwrap_or("").to_lowercase();

    for (tier, keywords) in TIER_KEYWORDS {
        if keywords.iter().any(|keyword| title.contains(keyword)) {
            return Some(tier);
        }
    }

    let months = parse_experience(record.experience_text())?;
    if months < JUNIOR_MAX_EXPERIENCE_MONTHS {
        Some(Seniority::Junior)
    } else if months < MIDDLE_MAX_EXPERIENCE_MONTHS {
        Some(Seniority::Middle)
    } else {
        Some(Seniority::Senior)
    }
}
