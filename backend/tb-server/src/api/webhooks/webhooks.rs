//! Webhook callback and subscription management handlers

use crate::api::json_body;
use crate::{ApiError, ApiResponse, ApiResult, RegisterWebhookRequest};

use tb_trello::Webhook;
use tb_ws::{AppState, IngestOutcome, ingest};

use std::panic::Location;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{BytesRejection, JsonRejection},
    },
    http::StatusCode,
};
use bytes::Bytes;
use error_location::ErrorLocation;
use log::{info, warn};

// =============================================================================
// Provider callback
// =============================================================================

/// HEAD /api/webhooks/callback
///
/// Reachability probe the provider sends before accepting a registration.
pub async fn callback_head() -> StatusCode {
    StatusCode::OK
}

/// POST /api/webhooks/callback
///
/// Always acknowledges: the outcome of the ingest is only logged and counted.
/// A body that cannot be read (over the size cap, aborted upload) counts as a
/// parse error.
pub async fn callback(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, &'static str) {
    match body {
        Ok(body) => {
            ingest(&body, &state.broadcaster, &state.metrics).await;
        }
        Err(e) => {
            warn!("Webhook body could not be read: {}", e.body_text());
            state
                .metrics
                .webhook_outcome(IngestOutcome::ParseError.label());
        }
    }

    (StatusCode::OK, "OK")
}

// =============================================================================
// Subscription management
// =============================================================================

/// POST /api/webhooks/register
pub async fn register_webhook(
    State(state): State<AppState>,
    payload: Result<Json<RegisterWebhookRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Webhook>> {
    let request = json_body(payload)?;

    let board_id = request
        .board_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::validation("boardId is required"))?;

    let callback_url =
        state
            .webhook
            .callback_url
            .as_deref()
            .ok_or_else(|| ApiError::Internal {
                message: "Webhook callback URL is not configured (TB_WEBHOOK_CALLBACK_URL)"
                    .to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

    let webhook = state
        .trello
        .register_webhook(board_id, request.description.as_deref(), callback_url)
        .await?;

    info!("Registered webhook {} for board {}", webhook.id, webhook.id_model);

    Ok(ApiResponse::created(webhook))
}

/// GET /api/webhooks
pub async fn list_webhooks(State(state): State<AppState>) -> ApiResult<ApiResponse<Vec<Webhook>>> {
    let webhooks = state.trello.list_webhooks().await?;
    Ok(ApiResponse::ok(webhooks))
}

/// DELETE /api/webhooks/{webhook_id}
pub async fn delete_webhook(
    State(state): State<AppState>,
    Path(webhook_id): Path<String>,
) -> ApiResult<ApiResponse<()>> {
    state.trello.delete_webhook(&webhook_id).await?;
    info!("Deleted webhook {}", webhook_id);

    Ok(ApiResponse::message("Webhook deleted successfully"))
}
