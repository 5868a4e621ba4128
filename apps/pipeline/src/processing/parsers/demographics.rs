use super::number_before;

/// Year words accepted after an age number (no "г." here — the source
/// field spells ages out).
const AGE_UNITS: &[&str] = &["год", "лет", "года", "year"];

/// Male cues are checked before female cues; cue order is part of the
/// contract.
const MALE_CUES: &[&str] = &["мужчина", "муж", "male"];
const FEMALE_CUES: &[&str] = &["женщина", "жен", "female"];

/// Extracts `(age, gender)` from a demographics field like
/// "Мужчина, 28 лет". Gender encoding: 1.0 male, 0.0 female. Each value is
/// independently `None` when its cue is absent — gender is never defaulted.
pub fn parse_demographics(text: Option<&str>) -> (Option<f64>, Option<f64>) {
    let Some(text) = text else {
        return (None, None);
    };
    let lower = text.to_lowercase();

    let age = number_before(&lower, AGE_UNITS).map(|n| n as f64);

    let gender = if MALE_CUES.iter().any(|cue| lower.contains(cue)) {
        Some(1.0)
    } else if FEMALE_CUES.iter().any(|cue| lower.contains(cue)) {
        Some(0.0)
    } else {
        None
    };

    (age, gender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_with_age() {
        assert_eq!(
            parse_demographics(Some("Мужчина, 28 лет")),
            (Some(28.0), Some(1.0))
        );
    }

    #[test]
    fn test_female_with_age() {
        assert_eq!(
            parse_demographics(Some("Женщина, 34 года")),
            (Some(34.0), Some(0.0))
        );
    }

    #[test]
    fn test_age_without_gender() {
        assert_eq!(parse_demographics(Some("31 год")), (Some(31.0), None));
    }

    #[test]
    fn test_gender_without_age() {
        assert_eq!(parse_demographics(Some("мужчина")), (None, Some(1.0)));
    }

    #[test]
    fn test_missing_yields_both_unknown() {
        assert_eq!(parse_demographics(None), (None, None));
    }

    #[test]
    fn test_no_cues_yields_both_unknown() {
        assert_eq!(parse_demographics(Some("не указано")), (None, None));
    }

    #[test]
    fn test_english_cues() {
        assert_eq!(
            parse_demographics(Some("Male, 25 years")),
            (Some(25.0), Some(1.0))
        );
    }
}
