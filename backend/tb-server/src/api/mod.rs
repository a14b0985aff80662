pub mod api_response;
pub mod error;
pub mod rate_limit;
pub mod trello;
pub mod webhooks;

use crate::ApiError;

use std::panic::Location;

use axum::{Json, extract::rejection::JsonRejection, http::Uri};
use error_location::ErrorLocation;

/// Unwrap a JSON body, turning extractor rejections into the error envelope
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| ApiError::validation(e.body_text()))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
