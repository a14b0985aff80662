use crate::ApiError;

use tb_trello::TrelloError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_envelope() {
    let (status, json) = body_json(ApiError::validation("boardId is required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "boardId is required");
}

#[tokio::test]
async fn test_provider_error_returns_502_with_provider_message() {
    let error = ApiError::from(TrelloError::Api {
        status: 401,
        message: "invalid token".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Trello API error (401): invalid token");
}

#[tokio::test]
async fn test_rate_limited_returns_429() {
    let error = ApiError::RateLimited {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"], "Too many requests, please try again later.");
}

#[tokio::test]
async fn test_internal_error_does_not_leak_location() {
    let error = ApiError::Internal {
        message: "Webhook callback URL is not configured".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(!message.contains(".rs"));
}
