use serde::Deserialize;

/// POST /api/webhooks/register body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWebhookRequest {
    #[serde(default)]
    pub board_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
