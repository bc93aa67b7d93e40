use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::admin::application::domain::{ActionKind, AdminEntity, PageError};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminPageError, AdminPageUseCase,
};
use crate::shared::api::ApiResponse;

/// Application state that can serve the admin page of `E`.
pub trait AdminPages<E: AdminEntity>: Send + Sync + 'static {
    fn admin_page(&self) -> &Arc<dyn AdminPageUseCase<E> + Send + Sync>;
}

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[schema(example = "commerce")]
    pub query: String,
}

//
// ──────────────────────────────────────────────────────────
// Routing
// ──────────────────────────────────────────────────────────
//

/// Mounts the session endpoints of one entity under `/api/admin/{E::PAGE}`.
pub fn configure_admin_page<E, S>(cfg: &mut web::ServiceConfig)
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    cfg.service(
        web::scope(&format!("/api/admin/{}", E::PAGE))
            .route("/sessions", web::post().to(open_session::<E, S>))
            .route("/sessions/{session_id}", web::get().to(get_session::<E, S>))
            .route(
                "/sessions/{session_id}",
                web::delete().to(close_session::<E, S>),
            )
            .route(
                "/sessions/{session_id}/search",
                web::put().to(set_search::<E, S>),
            )
            .route(
                "/sessions/{session_id}/draft",
                web::post().to(begin_new::<E, S>),
            )
            .route(
                "/sessions/{session_id}/draft",
                web::put().to(update_draft::<E, S>),
            )
            .route(
                "/sessions/{session_id}/draft",
                web::delete().to(cancel_draft::<E, S>),
            )
            .route(
                "/sessions/{session_id}/draft/submit",
                web::post().to(submit_draft::<E, S>),
            )
            .route(
                "/sessions/{session_id}/rows/{row_id}/{action}",
                web::post().to(row_action::<E, S>),
            ),
    );
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

async fn open_session<E, S>(data: web::Data<S>) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    match data.admin_page().open_session().await {
        Ok(page) => ApiResponse::created(page),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn get_session<E, S>(data: web::Data<S>, path: web::Path<Uuid>) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    match data.admin_page().get_session(path.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn close_session<E, S>(data: web::Data<S>, path: web::Path<Uuid>) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    match data.admin_page().close_session(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn set_search<E, S>(
    data: web::Data<S>,
    path: web::Path<Uuid>,
    payload: web::Json<SearchRequest>,
) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    let query = payload.into_inner().query;
    match data.admin_page().set_search(path.into_inner(), query).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn begin_new<E, S>(data: web::Data<S>, path: web::Path<Uuid>) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    match data.admin_page().begin_new(path.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn update_draft<E, S>(
    data: web::Data<S>,
    path: web::Path<Uuid>,
    payload: web::Json<E::Draft>,
) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    match data
        .admin_page()
        .update_draft(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn cancel_draft<E, S>(data: web::Data<S>, path: web::Path<Uuid>) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    match data.admin_page().cancel_draft(path.into_inner()).await {
        Ok(page) => ApiResponse::success(page),
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn submit_draft<E, S>(data: web::Data<S>, path: web::Path<Uuid>) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    let session_id = path.into_inner();
    match data.admin_page().submit_draft(session_id).await {
        Ok(update) => {
            if let (Some(entity_id), Some(notification)) = (&update.entity_id, &update.notification)
            {
                info!(
                    page = E::PAGE,
                    %session_id,
                    %entity_id,
                    message = %notification.message,
                    "Admin record saved"
                );
            }
            ApiResponse::success(update)
        }
        Err(err) => map_admin_page_error::<E>(err),
    }
}

async fn row_action<E, S>(
    data: web::Data<S>,
    path: web::Path<(Uuid, String, String)>,
) -> HttpResponse
where
    E: AdminEntity,
    S: AdminPages<E>,
{
    let (session_id, row_id, action) = path.into_inner();

    let action = match action.parse::<ActionKind>() {
        Ok(action) => action,
        Err(err) => {
            warn!(page = E::PAGE, %session_id, error = %err, "Unknown row action");
            return ApiResponse::bad_request("ACTION_NOT_AVAILABLE", &err.to_string());
        }
    };

    match data
        .admin_page()
        .row_action(session_id, row_id.clone(), action)
        .await
    {
        Ok(update) => {
            if let Some(notification) = &update.notification {
                info!(
                    page = E::PAGE,
                    %session_id,
                    entity_id = %row_id,
                    %action,
                    message = %notification.message,
                    "Row action applied"
                );
            }
            ApiResponse::success(update)
        }
        Err(err) => map_admin_page_error::<E>(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_admin_page_error<E: AdminEntity>(err: AdminPageError) -> HttpResponse {
    warn!(page = E::PAGE, error = %err, "Admin page request rejected");

    match err {
        AdminPageError::SessionNotFound => {
            ApiResponse::not_found("SESSION_NOT_FOUND", "Page session not found")
        }
        AdminPageError::SessionLimitReached(_) => {
            ApiResponse::service_unavailable("SESSION_LIMIT_REACHED", &err.to_string())
        }
        AdminPageError::Page(PageError::NotDrafting) => {
            ApiResponse::conflict("NOT_DRAFTING", "No draft is open")
        }
        AdminPageError::Page(PageError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        AdminPageError::Page(PageError::ActionNotAvailable(action)) => ApiResponse::bad_request(
            "ACTION_NOT_AVAILABLE",
            &format!("Row action {} is not available on this page", action),
        ),
        AdminPageError::Page(PageError::UnrepresentableRecord(e)) => {
            ApiResponse::unprocessable("UNREPRESENTABLE_RECORD", &e.to_string())
        }
    }
}
