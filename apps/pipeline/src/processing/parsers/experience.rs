use super::number_before;

/// Year words, including the "г." abbreviation.
const YEAR_UNITS: &[&str] = &["год", "лет", "года", "year", "г."];
/// Month words, including the "мес." abbreviation.
const MONTH_UNITS: &[&str] = &["месяц", "месяцев", "month", "мес."];

/// Extracts total work experience in months from free text.
///
/// Matches the first `<n> <year-word>` and the first `<n> <month-word>`
/// occurrence independently and sums them as `years * 12 + months`.
/// Returns `None` when the field is missing or no quantity matched — a
/// zero total means "nothing found", never a valid zero experience.
pub fn parse_experience(text: Option<&str>) -> Option<f64> {
    let lower = text?.to_lowercase();

    let mut total_months = 0u64;
    if let Some(years) = number_before(&lower, YEAR_UNITS) {
        total_months = total_months.saturating_add(years.saturating_mul(12));
    }
    if let Some(months) = number_before(&lower, MONTH_UNITS) {
        total_months = total_months.saturating_add(months);
    }

    (total_months > 0).then_some(total_months as f64)
}
