use crate::{Result as TrelloResult, TrelloError, Webhook};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const DEFAULT_WEBHOOK_DESCRIPTION: &str = "Trello Board Webhook";

/// HTTP client for the task-board provider REST API.
///
/// Every request is authenticated with `key` and `token` query parameters.
#[derive(Clone)]
pub struct TrelloClient {
    base_url: String,
    api_key: String,
    token: String,
    client: ReqwestClient,
}

impl TrelloClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Provider API root (e.g., "https://api.trello.com/1")
    /// * `api_key` - Provider API key
    /// * `token` - Provider member token
    pub fn new(base_url: &str, api_key: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            token: token.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated request URL from path segments.
    ///
    /// Each segment is percent-encoded on its own, so an id can never
    /// reach a different endpoint. Empty, `.` and `..` segments are rejected.
    #[track_caller]
    fn url(&self, segments: &[&str], params: &[(&str, String)]) -> TrelloResult<Url> {
        let invalid = |message: String| TrelloError::InvalidUrl {
            url: format!("{}/{}", self.base_url, segments.join("/")),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        if let Some(bad) = segments
            .iter()
            .find(|s| s.trim().is_empty() || matches!(**s, "." | ".."))
        {
            return Err(invalid(format!("invalid path segment '{}'", bad)));
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| invalid("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("token", &self.token)
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));

        Ok(url)
    }

    /// Send request and return the body, mapping non-2xx to `TrelloError::Api`
    async fn send(&self, method: Method, url: Url) -> TrelloResult<String> {
        debug!("Provider request: {} {}", method, url.path());

        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TrelloError::Api {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    /// Send request and decode the JSON body
    async fn execute<T: DeserializeOwned>(&self, method: Method, url: Url) -> TrelloResult<T> {
        let body = self.send(method, url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Boards, lists and cards
    // =========================================================================

    /// Boards visible to the token owner
    pub async fn get_boards(&self) -> TrelloResult<Value> {
        let url = self.url(&["members", "me", "boards"], &[])?;
        self.execute(Method::GET, url).await
    }

    /// Lists of a board
    pub async fn get_board_lists(&self, board_id: &str) -> TrelloResult<Value> {
        let url = self.url(&["boards", board_id, "lists"], &[])?;
        self.execute(Method::GET, url).await
    }

    /// Cards of a board
    pub async fn get_cards(&self, board_id: &str) -> TrelloResult<Value> {
        let url = self.url(&["boards", board_id, "cards"], &[])?;
        self.execute(Method::GET, url).await
    }

    /// Create a card at the bottom of a list
    pub async fn create_card(
        &self,
        list_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> TrelloResult<Value> {
        let params = [
            ("idList", list_id.to_string()),
            ("name", name.to_string()),
            ("desc", description.unwrap_or_default().to_string()),
        ];
        let url = self.url(&["cards"], &params)?;
        self.execute(Method::POST, url).await
    }

    /// Update card fields. Each entry of `fields` becomes a query parameter.
    pub async fn update_card(&self, card_id: &str, fields: &Map<String, Value>) -> TrelloResult<Value> {
        let params: Vec<(&str, String)> = fields
            .iter()
            .filter_map(|(name, value)| query_value(value).map(|v| (name.as_str(), v)))
            .collect();
        let url = self.url(&["cards", card_id], &params)?;
        self.execute(Method::PUT, url).await
    }

    // =========================================================================
    // Webhook subscriptions
    // =========================================================================

    /// Subscribe `callback_url` to changes on the model (board) `board_id`
    pub async fn register_webhook(
        &self,
        board_id: &str,
        description: Option<&str>,
        callback_url: &str,
    ) -> TrelloResult<Webhook> {
        let params = [
            ("callbackURL", callback_url.to_string()),
            ("idModel", board_id.to_string()),
            (
                "description",
                description.unwrap_or(DEFAULT_WEBHOOK_DESCRIPTION).to_string(),
            ),
        ];
        let url = self.url(&["webhooks"], &params)?;
        self.execute(Method::POST, url).await
    }

    /// Webhooks registered with this token
    pub async fn list_webhooks(&self) -> TrelloResult<Vec<Webhook>> {
        let url = self.url(&["tokens", self.token.as_str(), "webhooks"], &[])?;
        self.execute(Method::GET, url).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> TrelloResult<()> {
        let url = self.url(&["webhooks", webhook_id], &[])?;
        self.send(Method::DELETE, url).await?;
        Ok(())
    }
}

/// Provider errors arrive as JSON `{"message": ...}` or as plain text.
fn error_message(body: &str, reason: Option<&str>) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => reason.unwrap_or("Unknown error").to_string(),
    }
}

/// Render a JSON value as a query parameter; nulls are dropped.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
