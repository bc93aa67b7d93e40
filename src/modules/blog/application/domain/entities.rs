use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A blog article. Its id is the slug of its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    #[schema(example = "getting-started-with-business-automation")]
    pub id: String,
    #[schema(example = "Getting Started with Business Automation")]
    pub title: String,
    pub excerpt: String,
    #[schema(example = "Automation")]
    pub category: String,
    #[schema(example = "Likhil")]
    pub author: String,
    pub date: NaiveDate,
    #[schema(example = "5 min read")]
    pub read_time: String,
    pub image: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BlogPostDraft {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub read_time: String,
    pub image: String,
    pub featured: bool,
}
