pub mod client;
pub mod error;
pub mod webhook;

pub use client::{DEFAULT_WEBHOOK_DESCRIPTION, TrelloClient};
pub use error::{Result, TrelloError};
pub use webhook::Webhook;
