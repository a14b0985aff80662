pub mod register_webhook_request;
pub mod webhooks;
