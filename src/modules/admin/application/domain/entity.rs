// src/modules/admin/application/domain/entity.rs

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use super::form::{FormContext, FormError};
use super::list_codec::ListCodecError;
use super::table::DataTable;

pub trait Identified {
    fn id(&self) -> &str;
}

/// What a row action asks the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCommand {
    Edit(String),
    Delete(String),
    ToggleVisibility(String),
}

/// A record managed through an admin page.
///
/// Implementors describe how the generic page treats them: which fields
/// the search box looks at, how a draft becomes a record (derived fields
/// included), how a record is loaded back into a draft and which table the
/// page shows.
pub trait AdminEntity: Identified + Clone + Debug + Serialize + Send + Sync + 'static {
    /// Editable form state bound to the page's inputs.
    type Draft: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Path segment under `/api/admin`.
    const PAGE: &'static str;

    /// Used in notifications, e.g. "Project created successfully".
    const NOUN: &'static str;

    fn set_id(&mut self, id: String);

    fn search_fields(&self) -> Vec<&str>;

    fn blank_draft(ctx: &FormContext) -> Self::Draft;

    /// Loads a record into the form. Fails when a list field holds an entry
    /// the form's text encoding cannot carry.
    fn to_draft(&self) -> Result<Self::Draft, ListCodecError>;

    /// Builds the record a submit produces. `editing` is the record being
    /// replaced, `None` on create.
    fn from_draft(
        draft: &Self::Draft,
        editing: Option<&Self>,
        ctx: &FormContext,
    ) -> Result<Self, FormError>;

    fn table() -> DataTable<Self, RowCommand>;

    /// Display order applied after filtering. Keeps list order by default.
    fn display_order(_items: &mut Vec<&Self>) {}

    /// Visibility flag for entities that have one.
    fn visibility(&self) -> Option<bool> {
        None
    }

    fn set_visibility(&mut self, _visible: bool) {}

    fn visibility_notice(visible: bool) -> String {
        if visible {
            format!("{} shown", Self::NOUN)
        } else {
            format!("{} hidden", Self::NOUN)
        }
    }
}

impl<E> DataTable<E, RowCommand>
where
    E: AdminEntity,
{
    /// Wires the edit and delete row actions.
    pub fn editable(self) -> Self {
        self.on_edit(|item: &E| RowCommand::Edit(item.id().to_string()))
            .on_delete(|item: &E| RowCommand::Delete(item.id().to_string()))
    }

    /// Wires the visibility toggle against the entity's own flag.
    pub fn toggleable(self) -> Self {
        self.on_toggle_visibility(|item: &E| RowCommand::ToggleVisibility(item.id().to_string()))
            .is_visible(|item: &E| item.visibility().unwrap_or(false))
    }
}
