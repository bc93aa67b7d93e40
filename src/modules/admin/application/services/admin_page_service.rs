use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::modules::admin::application::domain::{ActionKind, AdminEntity, AdminPage, FormContext};
use crate::modules::admin::application::ports::{
    incoming::use_cases::{AdminPageError, AdminPageUseCase, PageSnapshot, PageUpdate},
    outgoing::{Clock, SeedSource},
};

/// Sessions untouched for this long are reclaimed when a new one opens.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// One open page plus the last time any request reached it.
struct Session<E: AdminEntity> {
    page: Mutex<AdminPage<E>>,
    last_seen: Mutex<Instant>,
}

impl<E: AdminEntity> Session<E> {
    fn new(page: AdminPage<E>) -> Self {
        Self {
            page: Mutex::new(page),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    async fn touch(&self) {
        *self.last_seen.lock().await = Instant::now();
    }

    async fn idle_for(&self) -> Duration {
        self.last_seen.lock().await.elapsed()
    }
}

/// Serves every open page of one entity type.
///
/// Each session owns its own list, seeded when the session opens, so two
/// browser tabs never see each other's edits. Closing the session drops the
/// list; so does leaving it idle past the TTL once the cap is reached.
pub struct AdminPageService<E: AdminEntity> {
    seed: Arc<dyn SeedSource<E>>,
    clock: Arc<dyn Clock>,
    default_author: String,
    max_sessions: usize,
    idle_ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Arc<Session<E>>>>,
}

impl<E: AdminEntity> AdminPageService<E> {
    pub fn new(
        seed: Arc<dyn SeedSource<E>>,
        clock: Arc<dyn Clock>,
        default_author: impl Into<String>,
        max_sessions: usize,
    ) -> Self {
        Self {
            seed,
            clock,
            default_author: default_author.into(),
            max_sessions,
            idle_ttl: DEFAULT_IDLE_TTL,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }

    async fn session(&self, session_id: Uuid) -> Result<Arc<Session<E>>, AdminPageError> {
        let session = self
            .sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(AdminPageError::SessionNotFound)?;
        session.touch().await;
        Ok(session)
    }

    /// Drops sessions idle for at least the TTL. Returns how many went.
    async fn evict_idle(&self, sessions: &mut HashMap<Uuid, Arc<Session<E>>>) -> usize {
        let mut expired = Vec::new();
        for (id, session) in sessions.iter() {
            if session.idle_for().await >= self.idle_ttl {
                expired.push(*id);
            }
        }
        for id in &expired {
            sessions.remove(id);
        }
        expired.len()
    }

    fn form_context(&self) -> FormContext {
        FormContext::new(self.clock.now(), self.default_author.clone())
    }
}

impl<E: AdminEntity> fmt::Debug for AdminPageService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPageService")
            .field("page", &E::PAGE)
            .field("max_sessions", &self.max_sessions)
            .field("idle_ttl", &self.idle_ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: AdminEntity> AdminPageUseCase<E> for AdminPageService<E> {
    async fn open_session(&self) -> Result<PageSnapshot<E>, AdminPageError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            let evicted = self.evict_idle(&mut sessions).await;
            if evicted > 0 {
                info!(page = E::PAGE, evicted, "Idle admin pages reclaimed");
            }
        }
        if sessions.len() >= self.max_sessions {
            warn!(page = E::PAGE, limit = self.max_sessions, "Page session limit reached");
            return Err(AdminPageError::SessionLimitReached(self.max_sessions));
        }

        let session_id = Uuid::new_v4();
        let page = AdminPage::new(self.seed.seed());
        let snapshot = PageSnapshot::capture(session_id, &page);
        sessions.insert(session_id, Arc::new(Session::new(page)));

        info!(page = E::PAGE, %session_id, records = snapshot.total, "Admin page opened");
        Ok(snapshot)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<PageSnapshot<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let page = session.page.lock().await;
        Ok(PageSnapshot::capture(session_id, &page))
    }

    async fn close_session(&self, session_id: Uuid) -> Result<(), AdminPageError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .ok_or(AdminPageError::SessionNotFound)?;

        info!(page = E::PAGE, %session_id, "Admin page closed");
        Ok(())
    }

    async fn set_search(
        &self,
        session_id: Uuid,
        query: String,
    ) -> Result<PageSnapshot<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let mut page = session.page.lock().await;
        page.set_search(query);
        Ok(PageSnapshot::capture(session_id, &page))
    }

    async fn begin_new(&self, session_id: Uuid) -> Result<PageSnapshot<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let mut page = session.page.lock().await;
        page.begin_new(&self.form_context());
        Ok(PageSnapshot::capture(session_id, &page))
    }

    async fn update_draft(
        &self,
        session_id: Uuid,
        draft: E::Draft,
    ) -> Result<PageSnapshot<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let mut page = session.page.lock().await;
        page.set_draft(draft)?;
        Ok(PageSnapshot::capture(session_id, &page))
    }

    async fn cancel_draft(&self, session_id: Uuid) -> Result<PageSnapshot<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let mut page = session.page.lock().await;
        page.cancel();
        Ok(PageSnapshot::capture(session_id, &page))
    }

    async fn submit_draft(&self, session_id: Uuid) -> Result<PageUpdate<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let mut page = session.page.lock().await;

        let saved = page.save(&self.form_context()).inspect_err(|e| {
            debug!(page = E::PAGE, %session_id, error = %e, "Draft rejected");
        })?;

        Ok(PageUpdate {
            entity_id: saved.as_ref().map(|s| s.entity_id.clone()),
            notification: saved.map(|s| s.notification),
            page: PageSnapshot::capture(session_id, &page),
        })
    }

    async fn row_action(
        &self,
        session_id: Uuid,
        row_id: String,
        action: ActionKind,
    ) -> Result<PageUpdate<E>, AdminPageError> {
        let session = self.session(session_id).await?;
        let mut page = session.page.lock().await;

        let notification = page.act(&row_id, action)?;
        debug!(page = E::PAGE, %session_id, entity_id = %row_id, %action, "Row action applied");

        Ok(PageUpdate {
            entity_id: notification.as_ref().map(|_| row_id.clone()),
            notification,
            page: PageSnapshot::capture(session_id, &page),
        })
    }
}
