use crate::vocab::MAJOR_CITIES;

const MOSCOW_CUES: &[&str] = &["москва", "moscow"];
const SPB_CUES: &[&str] = &["санкт-петербург", "петербург", "saint petersburg"];

/// Geography flags extracted from the city field. All three default to
/// false (not unknown) when the field is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityFeatures {
    pub million: bool,
    pub moscow: bool,
    pub spb: bool,
}

/// Classifies the city text against the major-cities vocabulary and the
/// two capital keyword sets.
///
/// The major-city flag compares comma-separated tokens for equality, not
/// substrings — "Томск" must not match the vocabulary entry "омск". The
/// capital flags stay substring cues ("Московская область" style inputs).
pub fn parse_city(text: Option<&str>) -> CityFeatures {
    let Some(text) = text else {
        return CityFeatures::default();
    };
    let lower = text.to_lowercase();

    let million = lower
        .split(',')
        .map(str::trim)
        .any(|token| MAJOR_CITIES.contains(&token));

    CityFeatures {
        million,
        moscow: MOSCOW_CUES.iter().any(|cue| lower.contains(cue)),
        spb: SPB_CUES.iter().any(|cue| lower.contains(cue)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moscow() {
        let features = parse_city(Some("Москва, Россия"));
        assert_eq!(
            features,
            CityFeatures {
                million: true,
                moscow: true,
                spb: false
            }
        );
    }

    #[test]
    fn test_saint_petersburg() {
        let features = parse_city(Some("Санкт-Петербург"));
        assert!(features.million);
        assert!(!features.moscow);
        assert!(features.spb);
    }

    #[test]
    fn test_other_million_city() {
        let features = parse_city(Some("Казань"));
        assert!(features.million);
        assert!(!features.moscow);
        assert!(!features.spb);
    }

    #[test]
    fn test_small_city_all_false() {
        assert_eq!(parse_city(Some("Томск")), CityFeatures::default());
    }

    #[test]
    fn test_major_city_name_inside_another_city_not_matched() {
        // "томск" contains "омск" but is a different city
        assert!(!parse_city(Some("Томск")).million);
        assert!(parse_city(Some("Омск")).million);
    }

    #[test]
    fn test_major_city_with_country_suffix() {
        assert!(parse_city(Some("Казань, Россия")).million);
    }

    #[test]
    fn test_missing_all_false() {
        assert_eq!(parse_city(None), CityFeatures::default());
    }
}
