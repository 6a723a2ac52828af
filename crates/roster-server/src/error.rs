//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::RosterError;
use serde_json::json;

/// Wrapper turning core errors into HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
            RosterError::Validation { .. } => StatusCode::BAD_REQUEST,
            RosterError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            RosterError::Storage(_) => {
                tracing::error!("storage error: {}", self.0);
            }
            RosterError::NotFound { .. } | RosterError::Validation { .. } => {
                tracing::debug!("client error: {}", self.0);
            }
        }

        let status = self.status_code();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
