//! Task-board REST proxy handlers
//!
//! Thin forwarding to the provider; the upstream JSON is passed through
//! inside the success envelope.

use crate::api::json_body;
use crate::{ApiError, ApiResponse, ApiResult, CreateCardRequest};

use tb_ws::AppState;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::{Map, Value};

/// GET /api/trello/boards
pub async fn get_boards(State(state): State<AppState>) -> ApiResult<ApiResponse<Value>> {
    Ok(ApiResponse::ok(state.trello.get_boards().await?))
}

/// GET /api/trello/boards/{board_id}/lists
pub async fn get_board_lists(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    Ok(ApiResponse::ok(state.trello.get_board_lists(&board_id).await?))
}

/// GET /api/trello/boards/{board_id}/cards
pub async fn get_cards(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    Ok(ApiResponse::ok(state.trello.get_cards(&board_id).await?))
}

/// POST /api/trello/cards
pub async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CreateCardRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let request = json_body(payload)?;

    let (Some(list_id), Some(name)) = (
        non_empty(request.list_id.as_deref()),
        non_empty(request.name.as_deref()),
    ) else {
        return Err(ApiError::validation("listId and name are required"));
    };

    let card = state
        .trello
        .create_card(list_id, name, request.description.as_deref())
        .await?;

    Ok(ApiResponse::created(card))
}

/// PUT /api/trello/cards/{card_id}
///
/// The body is a JSON object of card fields to change.
pub async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let fields = json_body(payload)?;
    Ok(ApiResponse::ok(state.trello.update_card(&card_id, &fields).await?))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
