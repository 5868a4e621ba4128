use serde::Deserialize;

/// One scraped résumé row, as exported by the job board. All fields are
/// free text and any of them may be blank.
///
/// The `rename` attributes map the export's column captions onto the
/// logical field names used throughout the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "Ищет работу на должность:")]
    pub title: Option<String>,

    #[serde(rename = "ЗП")]
    pub salary_text: Option<String>,

    #[serde(rename = "Пол, возраст")]
    pub demographics_text: Option<String>,

    #[serde(rename = "Город")]
    pub city_text: Option<String>,

    #[serde(rename = "Опыт (двойное нажатие для полной версии)")]
    pub experience_text: Option<String>,

    #[serde(rename = "Образование и ВУЗ")]
    pub education_text: Option<String>,
}

/// Source column captions the loader requires to be present in the header.
/// Order matches the struct fields.
pub const CSV_COLUMNS: [&str; 6] = [
    "Ищет работу на должность:",
    "ЗП",
    "Пол, возраст",
    "Город",
    "Опыт (двойное нажатие для полной версии)",
    "Образование и ВУЗ",
];

impl ResumeRecord {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn salary_text(&self) -> Option<&str> {
        self.salary_text.as_deref()
    }

    pub fn demographics_text(&self) -> Option<&str> {
        self.demographics_text.as_deref()
    }

    pub fn city_text(&self) -> Option<&str> {
        self.city_text.as_deref()
    }

    pub fn experience_text(&self) -> Option<&str> {
        self.experience_text.as_deref()
    }

    pub fn education_text(&self) -> Option<&str> {
        self.education_text.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ResumeRecord;

    /// Builds a record with just a title, the most common test shape.
    pub fn with_title(title: &str) -> ResumeRecord {
        ResumeRecord {
            title: Some(title.to_string()),
            ..ResumeRecord::default()
        }
    }

    /// Builds a fully populated record.
    pub fn full(
        title: &str,
        salary: &str,
        demographics: &str,
        city: &str,
        experience: &str,
        education: &str,
    ) -> ResumeRecord {
        ResumeRecord {
            title: Some(title.to_string()),
            salary_text: Some(salary.to_string()),
            demographics_text: Some(demographics.to_string()),
            city_text: Some(city.to_string()),
            experience_text: Some(experience.to_string()),
            education_text: Some(education.to_string()),
        }
    }
}
