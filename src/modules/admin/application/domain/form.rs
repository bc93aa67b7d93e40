// src/modules/admin/application/domain/form.rs

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl FormError {
    pub fn field(&self) -> &'static str {
        match self {
            FormError::MissingField(field) => field,
            FormError::InvalidField { field, .. } => field,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Submit context
// ──────────────────────────────────────────────────────────
//

/// Values a form needs at submit time that do not come from the draft.
#[derive(Debug, Clone)]
pub struct FormContext {
    pub now: DateTime<Utc>,
    pub default_author: String,
}

impl FormContext {
    pub fn new(now: DateTime<Utc>, default_author: impl Into<String>) -> Self {
        Self {
            now,
            default_author: default_author.into(),
        }
    }

    /// Id for a newly created record: milliseconds since the epoch.
    pub fn timestamp_id(&self) -> String {
        self.now.timestamp_millis().to_string()
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

//
// ──────────────────────────────────────────────────────────
// Field helpers
// ──────────────────────────────────────────────────────────
//

/// Required text input: blank (after trimming) blocks the submit.
pub fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Optional text input: blank becomes `None`.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Lowercase, whitespace runs collapsed to `-`.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN
        .replace_all(title.trim(), "-")
        .to_lowercase()
}

/// Parses a `YYYY-MM` month input.
pub fn parse_month(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").map_err(|_| {
        FormError::InvalidField {
            field,
            reason: format!("expected YYYY-MM, got {:?}", value),
        }
    })
}
