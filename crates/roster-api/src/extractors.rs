//! # Request Extraction Helpers
//!
//! JSON body extraction with uniform error mapping: a body that cannot be
//! deserialized fails with `InvalidArgument` before any domain logic runs.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use roster_core::RosterError;

use crate::error::ApiError;

/// Extract a JSON body, mapping deserialization failures to
/// [`RosterError::InvalidArgument`].
///
/// Handlers should use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., ApiError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(v)| v)
        .map_err(|_| ApiError(RosterError::invalid_argument("Invalid request body")))
}
