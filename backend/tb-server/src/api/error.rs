//! REST API error types
//!
//! Every error renders as the `{"success": false, "error": <message>}`
//! envelope with a matching HTTP status code.

use tb_trello::TrelloError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid request input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Task-board provider failed or rejected the call (502)
    #[error("Upstream error: {source} {location}")]
    Upstream {
        #[source]
        source: TrelloError,
        location: ErrorLocation,
    },

    /// Client exceeded the API quota (429)
    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },

    /// Route does not exist (404)
    #[error("Route not found: {path} {location}")]
    NotFound {
        path: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller (no source locations)
    fn public_message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::Internal { message, .. } => message.clone(),
            Self::Upstream { source, .. } => match source {
                TrelloError::Api {
                    status, message, ..
                } => format!("Trello API error ({status}): {message}"),
                _ => "Trello API unavailable".to_string(),
            },
            Self::RateLimited { .. } => {
                "Too many requests, please try again later.".to_string()
            }
            Self::NotFound { .. } => "Route not found".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.status() {
            status if status.is_server_error() => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let body = ApiErrorResponse {
            success: false,
            error: self.public_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<TrelloError> for ApiError {
    #[track_caller]
    fn from(source: TrelloError) -> Self {
        ApiError::Upstream {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
