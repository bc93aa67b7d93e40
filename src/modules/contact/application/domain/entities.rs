use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What kind of engagement the visitor is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProjectType {
    #[serde(rename = "Web Design")]
    WebDesign,
    #[serde(rename = "Brand Identity")]
    BrandIdentity,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    Consulting,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::WebDesign,
        ProjectType::BrandIdentity,
        ProjectType::UiUxDesign,
        ProjectType::Consulting,
        ProjectType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::WebDesign => "Web Design",
            ProjectType::BrandIdentity => "Brand Identity",
            ProjectType::UiUxDesign => "UI/UX Design",
            ProjectType::Consulting => "Consulting",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project type {0:?}")]
pub struct UnknownProjectType(pub String);

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownProjectType(s.to_string()))
    }
}

/// Toast shown once a message went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactAcknowledgement {
    #[schema(example = "Message sent!")]
    pub title: String,
    #[schema(example = "Thank you for reaching out. I'll get back to you within 24 hours.")]
    pub description: String,
}

impl ContactAcknowledgement {
    pub fn message_sent() -> Self {
        Self {
            title: "Message sent!".to_string(),
            description: "Thank you for reaching out. I'll get back to you within 24 hours."
                .to_string(),
        }
    }
}
