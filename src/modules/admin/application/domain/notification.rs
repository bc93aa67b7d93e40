use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
}

/// Fire-and-forget message shown after a mutation went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notification {
    pub level: NotificationLevel,
    #[schema(example = "Project created successfully")]
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn created(noun: &str) -> Self {
        Self::success(format!("{} created successfully", noun))
    }

    pub fn updated(noun: &str) -> Self {
        Self::success(format!("{} updated successfully", noun))
    }

    pub fn deleted(noun: &str) -> Self {
        Self::success(format!("{} deleted successfully", noun))
    }
}
