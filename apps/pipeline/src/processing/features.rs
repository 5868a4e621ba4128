//! Feature assembly: applies every field parser across the filtered rows
//! and lays the results out in a fixed column order.

use crate::models::ResumeRecord;
use crate::processing::parsers::{
    extract_tech_skills, parse_city, parse_demographics, parse_education, parse_experience,
    parse_salary,
};
use crate::vocab::{BASE_FEATURE_NAMES, TECH_STACK};

/// Parsed feature values for one résumé. Base features that a parser could
/// not determine stay `None`; geography flags and skill flags are always
/// concrete. `skills` is aligned with [`TECH_STACK`] order.
#[derive(Debug, Clone)]
pub struct ParsedFeatures {
    pub experience_months: Option<f64>,
    pub salary_rub: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<f64>,
    pub education_level: Option<f64>,
    pub city_million: bool,
    pub city_moscow: bool,
    pub city_spb: bool,
    pub skills: Vec<bool>,
}

impl ParsedFeatures {
    /// True when every required base feature was determined.
    pub fn is_complete(&self) -> bool {
        self.experience_months.is_some()
            && self.salary_rub.is_some()
            && self.age.is_some()
            && self.gender.is_some()
            && self.education_level.is_some()
    }

    /// Materializes the row as a dense feature vector in output column
    /// order, or `None` if any required feature is missing.
    pub fn dense_row(&self) -> Option<Vec<f64>> {
        let mut row = Vec::with_capacity(BASE_FEATURE_NAMES.len() + self.skills.len());
        row.push(self.experience_months?);
        row.push(self.salary_rub?);
        row.push(self.age?);
        row.push(self.gender?);
        row.push(self.education_level?);
        row.push(flag_value(self.city_million));
        row.push(flag_value(self.city_moscow));
        row.push(flag_value(self.city_spb));
        row.extend(self.skills.iter().map(|&flag| flag_value(flag)));
        Some(row)
    }
}

fn flag_value(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Parses every field of every row. Never drops rows — the output is 1:1
/// with the input so callers can audit which rows were incomplete.
pub fn extract_features(records: &[ResumeRecord]) -> Vec<ParsedFeatures> {
    records.iter().map(extract_row).collect()
}

fn extract_row(record: &ResumeRecord) -> ParsedFeatures {
    let (age, gender) = parse_demographics(record.demographics_text());
    let city = parse_city(record.city_text());
    let skills_found = extract_tech_skills(record.title());

    ParsedFeatures {
        experience_months: parse_experience(record.experience_text()),
        salary_rub: parse_salary(record.salary_text()),
        age,
        gender,
        education_level: parse_education(record.education_text()),
        city_million: city.million,
        city_moscow: city.moscow,
        city_spb: city.spb,
        skills: TECH_STACK
            .iter()
            .map(|tech| skills_found.contains(tech))
            .collect(),
    }
}

/// Output column names: the 8 base features followed by one `skill_<tech>`
/// column per vocabulary entry, in vocabulary (alphabetical) order.
/// Deterministic and independent of the data.
pub fn feature_names() -> Vec<String> {
    BASE_FEATURE_NAMES
        .iter()
        .map(|name| (*name).to_string())
        .chain(TECH_STACK.iter().map(|tech| format!("skill_{tech}")))
        .collect()
}
