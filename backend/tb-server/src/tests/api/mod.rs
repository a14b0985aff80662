mod api_response;
mod error;
mod rate_limit;
