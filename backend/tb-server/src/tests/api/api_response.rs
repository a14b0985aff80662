use crate::ApiResponse;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_ok_wraps_data() {
    let response = ApiResponse::ok(json!([{ "id": "B1" }])).into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "data": [{ "id": "B1" }] })
    );
}

#[tokio::test]
async fn test_created_uses_201() {
    let response = ApiResponse::created(json!({ "id": "C1" })).into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["id"], "C1");
}

#[tokio::test]
async fn test_message_has_no_data() {
    let response = ApiResponse::message("Webhook deleted successfully").into_response();

    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "message": "Webhook deleted successfully" })
    );
}
