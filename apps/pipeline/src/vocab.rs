//! Reference vocabularies for résumé parsing and labeling.
//!
//! Loaded once (as consts), never mutated. Keyword matching everywhere is
//! case-insensitive substring matching over the lowercased source text.

/// Substrings that mark a position title as an IT developer résumé.
pub const IT_DEVELOPER_KEYWORDS: &[&str] = &[
    "разработчик",
    "developer",
    "программист",
    "programmer",
    "backend",
    "frontend",
    "fullstack",
    "full stack",
    "full-stack",
    "software engineer",
    "инженер-программист",
    "веб-разработчик",
    "web developer",
    "mobile developer",
    "ios developer",
    "android developer",
    "react",
    "python",
    "java",
];

/// Title keywords for the junior tier.
pub const JUNIOR_KEYWORDS: &[&str] = &[
    "junior",
    "младший",
    "стажёр",
    "стажер",
    "помощник",
    "ассистент",
    "trainee",
    "intern",
    "джуниор",
    "джун",
];

/// Title keywords for the middle tier.
pub const MIDDLE_KEYWORDS: &[&str] = &["middle", "миддл", "мидл"];

/// Title keywords for the senior tier.
pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior",
    "старший",
    "ведущий",
    "синьор",
    "сеньор",
    "lead",
    "главный",
    "руководитель",
    "архитектор",
    "principal",
    "team lead",
    "тимлид",
    "сениор",
    "синьёр",
];

/// Tracked technologies, one `skill_<tech>` feature column each.
/// Kept in ascending byte order so the column layout is stable; a unit test
/// guards the ordering.
pub const TECH_STACK: &[&str] = &[
    "1c",
    "1с",
    "angular",
    "aws",
    "azure",
    "c#",
    "c++",
    "django",
    "docker",
    "flask",
    "git",
    "go",
    "golang",
    "java",
    "javascript",
    "k8s",
    "kotlin",
    "kubernetes",
    "linux",
    "mongodb",
    "mysql",
    "node.js",
    "nodejs",
    "php",
    "postgres",
    "postgresql",
    "python",
    "react",
    "redis",
    "ruby",
    "rust",
    "spring",
    "swift",
    "typescript",
    "vue",
];

/// Million-plus Russian cities.
pub const MAJOR_CITIES: &[&str] = &[
    "москва",
    "moscow",
    "санкт-петербург",
    "петербург",
    "saint petersburg",
    "новосибирск",
    "екатеринбург",
    "казань",
    "нижний новгород",
    "челябинск",
    "самара",
    "омск",
    "ростов-на-дону",
    "уфа",
    "красноярск",
    "воронеж",
    "пермь",
    "волгоград",
];

/// Education levels on an ordinal 0–3 scale. Iteration order matters: the
/// first keyword found in the text wins ("неполное высшее" must be checked
/// before "высшее").
pub const EDUCATION_LEVELS: &[(&str, u8)] = &[
    ("среднее", 0),
    ("средне-специальное", 1),
    ("неполное высшее", 2),
    ("высшее", 3),
    ("бакалавр", 3),
    ("магистр", 3),
    ("специалист", 3),
];

/// Rank assigned when education text matches no level keyword.
/// Unparseable text is treated as a completed degree, not as missing.
pub const DEFAULT_EDUCATION_RANK: u8 = 3;

/// Experience thresholds in months: below the first is junior, below the
/// second is middle, everything else is senior.
pub const JUNIOR_MAX_EXPERIENCE_MONTHS: f64 = 24.0;
pub const MIDDLE_MAX_EXPERIENCE_MONTHS: f64 = 60.0;

/// Fixed conversion rates into rubles. No live rate lookups.
pub const USD_TO_RUB_RATE: f64 = 75.0;
pub const EUR_TO_RUB_RATE: f64 = 85.0;

/// Base feature columns, in output order; `skill_<tech>` columns follow.
pub const BASE_FEATURE_NAMES: [&str; 8] = [
    "experience_months",
    "salary_rub",
    "age",
    "gender",
    "education_level",
    "city_million",
    "city_moscow",
    "city_spb",
];

/// Target classes in encoding order (junior=0, middle=1, senior=2).
pub const CLASS_NAMES: [&str; 3] = ["junior", "middle", "senior"];

/// Minimum usable sample count after dropping incomplete rows.
pub const MIN_SAMPLES: usize = 10;
