// src/modules/admin/application/domain/page.rs

use tracing::debug;

use super::entity::{AdminEntity, RowCommand};
use super::form::{FormContext, FormError};
use super::list_codec::ListCodecError;
use super::notification::Notification;
use super::search;
use super::store::EntityStore;
use super::table::{ActionKind, DataTable, TableView};

//
// ──────────────────────────────────────────────────────────
// State
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMode {
    Idle,
    /// `editing` is the id being updated; `None` while creating.
    Drafting { editing: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no draft is open")]
    NotDrafting,

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("row action {0} is not available on this page")]
    ActionNotAvailable(ActionKind),

    #[error("record cannot be loaded into the form: {0}")]
    UnrepresentableRecord(#[from] ListCodecError),
}

//
// ──────────────────────────────────────────────────────────
// Page
// ──────────────────────────────────────────────────────────
//

/// A record written by a submit, with the notification it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub entity_id: String,
    pub notification: Notification,
}

/// One live admin page: the authoritative list, the search box, the
/// editing pointer and the draft. Dropping the page drops its list.
pub struct AdminPage<E: AdminEntity> {
    store: EntityStore<E>,
    table: DataTable<E, RowCommand>,
    search: String,
    mode: PageMode,
    draft: Option<E::Draft>,
}

impl<E: AdminEntity> AdminPage<E> {
    pub fn new(seed: Vec<E>) -> Self {
        Self {
            store: EntityStore::new(seed),
            table: E::table(),
            search: String::new(),
            mode: PageMode::Idle,
            draft: None,
        }
    }

    pub fn items(&self) -> &[E] {
        self.store.items()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn mode(&self) -> &PageMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            PageMode::Drafting { editing } => editing.as_deref(),
            PageMode::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&E::Draft> {
        self.draft.as_ref()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Records currently shown: filtered by the search box, in display order.
    pub fn visible(&self) -> Vec<&E> {
        search::display(self.store.items(), &self.search)
    }

    pub fn table_view(&self) -> TableView {
        self.table.render(self.visible())
    }

    //
    // ── Draft lifecycle ─────────────────────────────────────
    //

    pub fn begin_new(&mut self, ctx: &FormContext) {
        self.mode = PageMode::Drafting { editing: None };
        self.draft = Some(E::blank_draft(ctx));
    }

    /// Opens the form on an existing record. Returns `false` and leaves the
    /// page as it was when the id is unknown.
    pub fn begin_edit(&mut self, id: &str) -> Result<bool, PageError> {
        let Some(item) = self.store.get(id) else {
            debug!(page = E::PAGE, entity_id = %id, "Edit requested for unknown id");
            return Ok(false);
        };

        let draft = item.to_draft()?;
        self.mode = PageMode::Drafting {
            editing: Some(id.to_string()),
        };
        self.draft = Some(draft);
        Ok(true)
    }

    pub fn set_draft(&mut self, draft: E::Draft) -> Result<(), PageError> {
        if self.mode == PageMode::Idle {
            return Err(PageError::NotDrafting);
        }
        self.draft = Some(draft);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.mode = PageMode::Idle;
        self.draft = None;
    }

    /// Creates or updates one record from the draft and closes the form.
    ///
    /// A validation failure leaves the page drafting with the draft intact.
    /// Submitting an edit whose record has meanwhile been deleted closes the
    /// form without touching the list.
    pub fn submit(&mut self, ctx: &FormContext) -> Result<Option<Notification>, PageError> {
        Ok(self.save(ctx)?.map(|saved| saved.notification))
    }

    /// Same as [`submit`](Self::submit), also reporting the id written.
    pub fn save(&mut self, ctx: &FormContext) -> Result<Option<Saved>, PageError> {
        let editing = match &self.mode {
            PageMode::Drafting { editing } => editing.clone(),
            PageMode::Idle => return Err(PageError::NotDrafting),
        };
        if let Some(id) = editing.as_deref() {
            if !self.store.contains(id) {
                debug!(page = E::PAGE, entity_id = %id, "Edited record is gone; submit ignored");
                self.cancel();
                return Ok(None);
            }
        }

        let draft = self.draft.as_ref().ok_or(PageError::NotDrafting)?;
        let existing = editing.as_deref().and_then(|id| self.store.get(id));

        let mut record = E::from_draft(draft, existing, ctx)?;
        let id = self.store.unique_id(record.id(), editing.as_deref());
        record.set_id(id.clone());

        let notification = match editing {
            Some(editing_id) => {
                self.store.replace(&editing_id, record);
                Notification::updated(E::NOUN)
            }
            None => {
                self.store.prepend(record);
                Notification::created(E::NOUN)
            }
        };

        debug!(page = E::PAGE, entity_id = %id, "Record saved");
        self.cancel();
        Ok(Some(Saved {
            entity_id: id,
            notification,
        }))
    }

    //
    // ── Row mutations ───────────────────────────────────────
    //

    pub fn delete(&mut self, id: &str) -> Option<Notification> {
        self.store
            .remove(id)
            .map(|_| Notification::deleted(E::NOUN))
    }

    /// Flips the record's visibility flag in place. Does not open the form.
    pub fn toggle_visibility(&mut self, id: &str) -> Option<Notification> {
        let item = self.store.modify(id, |item| {
            if let Some(visible) = item.visibility() {
                item.set_visibility(!visible);
            }
        })?;

        item.visibility()
            .map(|visible| Notification::success(E::visibility_notice(visible)))
    }

    /// Runs a row action through the page's table.
    pub fn act(&mut self, id: &str, action: ActionKind) -> Result<Option<Notification>, PageError> {
        let Some(item) = self.store.get(id) else {
            debug!(page = E::PAGE, entity_id = %id, %action, "Row action on unknown id");
            return Ok(None);
        };

        let command = self
            .table
            .dispatch(item, action)
            .ok_or(PageError::ActionNotAvailable(action))?;

        match command {
            RowCommand::Edit(id) => {
                self.begin_edit(&id)?;
                Ok(None)
            }
            RowCommand::Delete(id) => Ok(self.delete(&id)),
            RowCommand::ToggleVisibility(id) => Ok(self.toggle_visibility(&id)),
        }
    }
}
