//! Field parsers: pure functions turning one raw text field into a parsed
//! value. Absence is always a return value (`None` / empty set / all-false
//! flags), never an error.

pub mod city;
pub mod demographics;
pub mod education;
pub mod experience;
pub mod salary;
pub mod tech_skills;

pub use city::parse_city;
pub use demographics::parse_demographics;
pub use education::parse_education;
pub use experience::parse_experience;
pub use salary::parse_salary;
pub use tech_skills::extract_tech_skills;

/// Finds the first digit run that is followed (after optional whitespace)
/// by any of the given unit words, and returns its numeric value.
///
/// `text` must already be lowercased. A digit run not followed by a unit
/// word is skipped, so "опыт 5 компаний, 3 года" resolves to 3 for the
/// year units.
pub(crate) fn number_before(text: &str, units: &[&str]) -> Option<u64> {
    for (run, rest) in digit_runs(text) {
        let after = rest.trim_start();
        if units.iter().any(|unit| after.starts_with(unit)) {
            if let Ok(value) = run.parse::<u64>() {
                return Some(value);
            }
        }
    }
    None
}

/// Returns the first digit run in the text as a number.
pub(crate) fn first_number(text: &str) -> Option<f64> {
    digit_runs(text)
        .next()
        // a pure-digit run always parses as f64
        .and_then(|(run, _)| run.parse::<f64>().ok())
}

/// Iterates over maximal ASCII digit runs, yielding each run together with
/// the remaining text after it.
fn digit_runs(text: &str) -> impl Iterator<Item = (&str, &str)> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            if bytes[pos].is_ascii_digit() {
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                return Some((&text[start..pos], &text[pos..]));
            }
            // digits are ASCII, so byte-wise stepping is safe here
            pos += 1;
        }
        None
    })
}
