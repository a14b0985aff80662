use crate::api::{not_found, rate_limit};
use crate::{
    ApiRateLimiter, callback, callback_head, create_card, delete_webhook, get_board_lists,
    get_boards, get_cards, health, list_webhooks, register_webhook, update_card,
};

use tb_config::RateLimitConfig;
use tb_ws::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Largest provider callback body that is read and ingested. Bigger bodies
/// are still acknowledged.
pub const CALLBACK_BODY_LIMIT: usize = 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, rate_limit: &RateLimitConfig) -> Router {
    // Quota shared by the proxy and webhook management routes
    let limited = Router::new()
        .route("/api/webhooks", get(list_webhooks))
        .route("/api/webhooks/register", post(register_webhook))
        .route("/api/webhooks/{webhook_id}", delete(delete_webhook))
        .route("/api/trello/boards", get(get_boards))
        .route("/api/trello/boards/{board_id}/lists", get(get_board_lists))
        .route("/api/trello/boards/{board_id}/cards", get(get_cards))
        .route("/api/trello/cards", post(create_card))
        .route("/api/trello/cards/{card_id}", put(update_card))
        .route_layer(middleware::from_fn_with_state(
            ApiRateLimiter::new(rate_limit),
            rate_limit::enforce,
        ));

    let cors = cors_layer(state.allowed_origin.as_deref());

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(tb_ws::handler))
        // Provider callback, never rate limited
        .route(
            "/api/webhooks/callback",
            post(callback)
                .head(callback_head)
                .layer(DefaultBodyLimit::max(CALLBACK_BODY_LIMIT)),
        )
        // Health check endpoints
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .merge(limited)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new().allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::HEAD,
    ]);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => base
            .allow_origin(AllowOrigin::exact(origin))
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
            .allow_credentials(true),
        Some(Err(e)) => {
            warn!("CORS origin is not a valid header value ({e}); cross-origin requests disabled");
            base
        }
        None => base.allow_origin(Any).allow_headers(Any),
    }
}
