use crate::shared::api::ApiResponse;
use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig};
use tracing::debug;

/// Malformed or mistyped bodies answer with the standard error envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        debug!(path = %req.path(), error = %message, "Rejected JSON body");
        InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
            .into()
    })
}

/// Path segments that fail to parse (a session id that is not a UUID)
/// cannot name an open session.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        debug!(path = %req.path(), error = %err, "Rejected path parameters");
        InternalError::from_response(
            err,
            ApiResponse::not_found("SESSION_NOT_FOUND", "Page session not found"),
        )
        .into()
    })
}
