//! Small admin entity and fixed collaborators for exercising the generic
//! admin page without any of the real portfolio records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::admin::application::domain::{
    required, AdminEntity, Column, DataTable, FormContext, FormError, Identified, ListCodec,
    ListCodecError, RowCommand,
};
use crate::modules::admin::application::ports::outgoing::{Clock, SeedSource};

// ──────────────────────────────────────────────────────────
// Note entity
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub tags: String,
}

impl NoteDraft {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

impl Identified for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl AdminEntity for Note {
    type Draft = NoteDraft;
    const PAGE: &'static str = "notes";
    const NOUN: &'static str = "Note";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn blank_draft(_ctx: &FormContext) -> NoteDraft {
        NoteDraft::default()
    }

    fn to_draft(&self) -> Result<NoteDraft, ListCodecError> {
        Ok(NoteDraft {
            title: self.title.clone(),
            tags: ListCodec::Comma.format(&self.tags)?,
        })
    }

    fn from_draft(
        draft: &NoteDraft,
        editing: Option<&Note>,
        ctx: &FormContext,
    ) -> Result<Note, FormError> {
        Ok(Note {
            id: editing
                .map(|n| n.id.clone())
                .unwrap_or_else(|| ctx.timestamp_id()),
            title: required("title", &draft.title)?,
            tags: ListCodec::Comma.parse(&draft.tags),
            pinned: editing.map(|n| n.pinned).unwrap_or(false),
        })
    }

    fn table() -> DataTable<Note, RowCommand> {
        DataTable::new(vec![Column::text("title", "Title", |n: &Note| {
            n.title.as_str()
        })])
        .editable()
        .toggleable()
    }

    fn visibility(&self) -> Option<bool> {
        Some(self.pinned)
    }

    fn set_visibility(&mut self, visible: bool) {
        self.pinned = visible;
    }
}

pub fn note(id: &str, title: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        tags: vec![],
        pinned: false,
    }
}

/// Alpha, Beta, Gamma under ids 1, 2, 3.
pub fn notes() -> Vec<Note> {
    vec![note("1", "Alpha"), note("2", "Beta"), note("3", "Gamma")]
}

// ──────────────────────────────────────────────────────────
// Collaborators
// ──────────────────────────────────────────────────────────

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

pub fn form_context() -> FormContext {
    FormContext::new(fixed_now(), "Likhil")
}

#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct StaticSeed<E>(pub Vec<E>);

impl<E: AdminEntity> SeedSource<E> for StaticSeed<E> {
    fn seed(&self) -> Vec<E> {
        self.0.clone()
    }
}
