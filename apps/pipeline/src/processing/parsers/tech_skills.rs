use std::collections::BTreeSet;

use crate::vocab::TECH_STACK;

/// Extracts the set of tracked technologies mentioned in the text.
///
/// Plain substring matching over the lowercased text, so "javascript" also
/// matches "java" and "django" also matches "go". Returns the empty set
/// (not unknown) for missing input.
pub fn extract_tech_skills(text: Option<&str>) -> BTreeSet<&'static str> {
    let Some(text) = text else {
        return BTreeSet::new();
    };
    let lower = text.to_lowercase();

    TECH_STACK
        .iter()
        .filter(|tech| lower.contains(*tech))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_skill() {
        let skills = extract_tech_skills(Some("Python разработчик"));
        assert!(skills.contains("python"));
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(extract_tech_skills(Some("REACT Developer")).contains("react"));
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "javascript" contains "java"; both are reported
        let skills = extract_tech_skills(Some("javascript"));
        assert!(skills.contains("javascript"));
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_every_tech_matches_itself() {
        for &tech in TECH_STACK {
            assert!(
                extract_tech_skills(Some(tech)).contains(tech),
                "{tech} not found in itself"
            );
        }
    }

    #[test]
    fn test_missing_is_empty_set() {
        assert!(extract_tech_skills(None).is_empty());
    }

    #[test]
    fn test_untracked_word_not_reported() {
        assert!(extract_tech_skills(Some("backend developer")).is_empty());
    }
}
