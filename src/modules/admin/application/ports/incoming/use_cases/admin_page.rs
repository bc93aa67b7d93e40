use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::admin::application::domain::{
    ActionKind, AdminEntity, AdminPage, Notification, PageError, PageMode, TableView,
};

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageModeView {
    Idle,
    Drafting,
}

/// Everything a client needs to draw one admin page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot<E: AdminEntity> {
    pub session_id: Uuid,
    pub page: &'static str,
    pub search: String,
    pub mode: PageModeView,
    pub editing_id: Option<String>,
    pub draft: Option<E::Draft>,
    /// Records in the authoritative list
    pub total: usize,
    /// Records left after the search filter
    pub shown: usize,
    pub table: TableView,
}

impl<E: AdminEntity> PageSnapshot<E> {
    pub fn capture(session_id: Uuid, page: &AdminPage<E>) -> Self {
        let table = page.table_view();
        Self {
            session_id,
            page: E::PAGE,
            search: page.search().to_string(),
            mode: match page.mode() {
                PageMode::Idle => PageModeView::Idle,
                PageMode::Drafting { .. } => PageModeView::Drafting,
            },
            editing_id: page.editing_id().map(str::to_string),
            draft: page.draft().cloned(),
            total: page.items().len(),
            shown: table.rows().len(),
            table,
        }
    }
}

/// Result of a mutating call: the notification to show (none on a no-op)
/// and the page after the change. `entity_id` names the record touched.
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate<E: AdminEntity> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub notification: Option<Notification>,
    pub page: PageSnapshot<E>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminPageError {
    #[error("page session not found")]
    SessionNotFound,

    #[error("too many open page sessions (limit {0})")]
    SessionLimitReached(usize),

    #[error(transparent)]
    Page(#[from] PageError),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AdminPageUseCase<E: AdminEntity>: Send + Sync {
    /// Opens a fresh page seeded with the initial dataset.
    async fn open_session(&self) -> Result<PageSnapshot<E>, AdminPageError>;

    async fn get_session(&self, session_id: Uuid) -> Result<PageSnapshot<E>, AdminPageError>;

    /// Drops the page and its list.
    async fn close_session(&self, session_id: Uuid) -> Result<(), AdminPageError>;

    async fn set_search(
        &self,
        session_id: Uuid,
        query: String,
    ) -> Result<PageSnapshot<E>, AdminPageError>;

    async fn begin_new(&self, session_id: Uuid) -> Result<PageSnapshot<E>, AdminPageError>;

    async fn update_draft(
        &self,
        session_id: Uuid,
        draft: E::Draft,
    ) -> Result<PageSnapshot<E>, AdminPageError>;

    async fn cancel_draft(&self, session_id: Uuid) -> Result<PageSnapshot<E>, AdminPageError>;

    async fn submit_draft(&self, session_id: Uuid) -> Result<PageUpdate<E>, AdminPageError>;

    async fn row_action(
        &self,
        session_id: Uuid,
        row_id: String,
        action: ActionKind,
    ) -> Result<PageUpdate<E>, AdminPageError>;
}
