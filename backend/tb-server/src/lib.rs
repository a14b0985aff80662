pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    api_response::ApiResponse,
    error::ApiError,
    error::Result as ApiResult,
    rate_limit::ApiRateLimiter,
    trello::{
        create_card_request::CreateCardRequest,
        trello::{create_card, get_board_lists, get_boards, get_cards, update_card},
    },
    webhooks::{
        register_webhook_request::RegisterWebhookRequest,
        webhooks::{callback, callback_head, delete_webhook, list_webhooks, register_webhook},
    },
};
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::{CALLBACK_BODY_LIMIT, build_router};
