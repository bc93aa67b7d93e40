use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Archived,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Active => f.write_str("active"),
            ProjectStatus::Archived => f.write_str("archived"),
        }
    }
}

/// A showcased piece of client work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "E-commerce Platform")]
    pub title: String,
    #[schema(example = "E-commerce")]
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub results: Vec<String>,
    #[schema(example = json!(["React", "Node.js", "Stripe"]))]
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub live_url: Option<String>,
    pub youtube_url: Option<String>,
    pub buy_url: Option<String>,
    pub status: ProjectStatus,
    #[schema(example = "2024")]
    pub year: String,
    pub client: String,
    #[schema(example = "6 weeks")]
    pub duration: String,
    pub created_at: NaiveDate,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

/// Project form state. `technologies` is comma separated; `features`,
/// `results` and `images` take one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectDraft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub features: String,
    pub results: String,
    pub technologies: String,
    pub images: String,
    pub live_url: String,
    pub youtube_url: String,
    pub buy_url: String,
    pub status: ProjectStatus,
    pub year: String,
    pub client: String,
    pub duration: String,
}
