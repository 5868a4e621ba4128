use crate::models::ResumeRecord;
use crate::vocab::IT_DEVELOPER_KEYWORDS;

/// Keeps only IT developer résumés: rows whose title (missing → empty
/// string) contains at least one developer keyword, case-insensitively.
/// Pure filter — row order is preserved and nothing else is touched.
pub fn filter_developers(records: &[ResumeRecord]) -> Vec<ResumeRecord> {
    records
        .iter()
        .filter(|record| is_developer_title(record.title()))
        .cloned()
        .collect()
}

fn is_developer_title(title: Option<&str>) -> bool {
    let lower = title.unwrap_or("").to_lowercase();
    IT_DEVELOPER_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::fixtures::with_title;

    #[test]
    fn test_keeps_developer_titles() {
        let records = vec![
            with_title("Python разработчик"),
            with_title("Бухгалтер"),
            with_title("Senior Java Developer"),
        ];
        let kept = filter_developers(&records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title(), Some("Python разработчик"));
        assert_eq!(kept[1].title(), Some("Senior Java Developer"));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(is_developer_title(Some("FRONTEND ENGINEER")));
    }

    #[test]
    fn test_substring_not_word_boundary() {
        // "веб-разработчика" still contains "разработчик"
        assert!(is_developer_title(Some("Помощник веб-разработчика")));
    }

    #[test]
    fn test_missing_title_excluded() {
        assert!(!is_developer_title(None));
    }

    #[test]
    fn test_non_developer_excluded() {
        let kept = filter_developers(&[with_title("Менеджер по продажам")]);
        assert!(kept.is_empty());
    }
}
