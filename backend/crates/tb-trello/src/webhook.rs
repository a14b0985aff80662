use serde::{Deserialize, Serialize};

/// Webhook subscription as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "idModel")]
    pub id_model: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
