use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One position in the work history.
///
/// Months are kept as `YYYY-MM` text so they sort chronologically as
/// strings. A current position has no end month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: String,
    #[schema(example = "Tech Corp")]
    pub company: String,
    #[schema(example = "Senior Developer")]
    pub role: String,
    pub description: String,
    #[schema(example = "2023-01")]
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    /// Derived on every submit, e.g. "Jan 2023 - Present"
    #[schema(example = "Jan 2023 - Present")]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceDraft {
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
}

/// Human-readable span: `"Jan 2023 - Present"`, `"Mar 2021 - Dec 2022"`,
/// or just the start month when there is neither an end nor a current flag.
pub fn format_duration(start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> String {
    let start = start.format("%b %Y");
    match (is_current, end) {
        (true, _) => format!("{} - Present", start),
        (false, Some(end)) => format!("{} - {}", start, end.format("%b %Y")),
        (false, None) => start.to_string(),
    }
}
