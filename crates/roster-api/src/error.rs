//! # API Error Mapping
//!
//! Maps the [`RosterError`] taxonomy to structured HTTP responses. This is
//! the only place where error kinds meet transport status codes; handlers
//! dispatch purely on the taxonomy and never inspect storage-specific
//! error types.
//!
//! Response bodies use a structured JSON shape with a machine-readable
//! code and a human-readable message. 500-class errors respond with a
//! generic message — the detail is logged server-side, never sent to the
//! client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::RosterError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The error payload.
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "INVALID_ARGUMENT").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Map a taxonomy error to its transport status code.
///
/// Pure and total: every kind maps to exactly one status. Foreign error
/// types never reach this function — they are translated into the taxonomy
/// at the repository boundary, with [`RosterError::Internal`] as the
/// defensive fallback where unexpected failures enter.
pub fn http_status(err: &RosterError) -> StatusCode {
    match err {
        RosterError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        RosterError::NotFound(_) => StatusCode::NOT_FOUND,
        RosterError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        RosterError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RosterError::NotConnected => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// API-layer error type implementing [`IntoResponse`] for Axum.
///
/// A transparent wrapper over [`RosterError`] so handlers can use `?` on
/// any service or domain call and get the uniform mapping.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub RosterError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = http_status(&self.0);

        // Never expose storage or internal failure detail to clients.
        let message = match &self.0 {
            RosterError::Internal | RosterError::Database(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        // Log server-side errors for operator visibility.
        match &self.0 {
            RosterError::Database(_) => tracing::error!(error = %self.0, "database error"),
            RosterError::Internal => tracing::error!(error = %self.0, "internal server error"),
            RosterError::NotConnected => tracing::warn!(error = %self.0, "database not connected"),
            _ => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.0.code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn status_mapping_is_total() {
        assert_eq!(
            http_status(&RosterError::invalid_argument("name")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            http_status(&RosterError::not_found("player not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            http_status(&RosterError::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            http_status(&RosterError::database("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            http_status(&RosterError::NotConnected),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    /// Helper to extract status and body from a response.
    async fn response_parts(err: ApiError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_invalid_argument() {
        let (status, body) =
            response_parts(ApiError(RosterError::invalid_argument("name"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.code, "INVALID_ARGUMENT");
        assert_eq!(body.error.message, "Invalid argument: name");
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) =
            response_parts(ApiError(RosterError::not_found("player not found"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("player not found"));
    }

    #[tokio::test]
    async fn into_response_database_hides_driver_detail() {
        let (status, body) =
            response_parts(ApiError(RosterError::database("connection reset by peer"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "DATABASE");
        assert!(
            !body.error.message.contains("connection reset"),
            "driver detail must not leak: {}",
            body.error.message
        );
        assert_eq!(body.error.message, "An internal error occurred");
    }

    #[tokio::test]
    async fn into_response_internal_hides_detail() {
        let (status, body) = response_parts(ApiError(RosterError::Internal)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "INTERNAL");
        assert_eq!(body.error.message, "An internal error occurred");
    }

    #[tokio::test]
    async fn into_response_not_connected() {
        let (status, body) = response_parts(ApiError(RosterError::NotConnected)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.error.code, "NOT_CONNECTED");
        assert_eq!(body.error.message, "Database connection is not established");
    }
}
