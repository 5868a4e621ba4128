use super::first_number;
use crate::vocab::{EUR_TO_RUB_RATE, USD_TO_RUB_RATE};

/// Extracts a salary in rubles from free text.
///
/// Spaces (including non-breaking ones) are stripped before scanning, so
/// "150 000" parses the same as "150000". The first digit run is the
/// amount; a currency cue converts it at the fixed rate, otherwise the
/// amount is assumed to already be rubles.
pub fn parse_salary(text: Option<&str>) -> Option<f64> {
    let clean: String = text?
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .collect::<String>()
        .to_lowercase();

    let amount = first_number(&clean)?;

    if clean.contains("usd") || clean.contains('$') {
        Some(amount * USD_TO_RUB_RATE)
    } else if clean.contains("eur") || clean.contains('€') {
        Some(amount * EUR_TO_RUB_RATE)
    } else {
        Some(amount)
    }
}
