use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Star rating, always within `1..=5`.
///
/// Out-of-range input is clamped on the way in, including when it arrives
/// through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(from = "u8", into = "u8")]
#[schema(value_type = u8, example = 5)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: String,
    #[schema(example = "John Doe")]
    pub client_name: String,
    #[schema(example = "CEO at TechStart")]
    pub client_role: String,
    pub feedback: String,
    pub rating: Rating,
    /// Only approved testimonials are shown on the public site
    pub is_approved: bool,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestimonialDraft {
    pub client_name: String,
    pub client_role: String,
    pub feedback: String,
    pub rating: Rating,
}
