use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::ContactAcknowledgement;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Contact form as typed by the visitor
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Ana Lima")]
    #[serde(default)]
    pub name: String,

    #[schema(example = "ana@example.com")]
    #[serde(default)]
    pub email: String,

    /// One of: Web Design, Brand Identity, UI/UX Design, Consulting, Other
    #[schema(example = "Web Design")]
    #[serde(default)]
    pub project_type: String,

    #[schema(example = "I need a landing page for my clinic.")]
    #[serde(default)]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Send a contact message
///
/// Validates the form and acknowledges it after a short simulated delay.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (
            status = 200,
            description = "Message accepted",
            body = inline(SuccessResponse<ContactAcknowledgement>),
            example = json!({
                "success": true,
                "data": {
                    "title": "Message sent!",
                    "description": "Thank you for reaching out. I'll get back to you within 24 hours."
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Missing field" = (value = json!({
                    "success": false,
                    "error": { "code": "VALIDATION_ERROR", "message": "email is required" }
                }))),
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_EMAIL", "message": "email address is not valid" }
                }))),
                ("Unknown project type" = (value = json!({
                    "success": false,
                    "error": { "code": "INVALID_PROJECT_TYPE", "message": "unknown project type \"Logo\"" }
                })))
            )
        ),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match SubmitContactCommand::new(
        &payload.name,
        &payload.email,
        &payload.project_type,
        &payload.message,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_submit_contact_error(err),
    };

    // 2️⃣ Execute use case
    match data.submit_contact_use_case.execute(command).await {
        Ok(ack) => ApiResponse::success(ack),
        Err(err) => map_submit_contact_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_submit_contact_error(err: SubmitContactError) -> HttpResponse {
    warn!(error = %err, "Contact message rejected");

    match &err {
        SubmitContactError::MissingField(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        SubmitContactError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
        SubmitContactError::UnknownProjectType(_) => {
            ApiResponse::bad_request("INVALID_PROJECT_TYPE", &err.to_string())
        }
    }
}
