//! Application State

use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for the payment service
    pub client: reqwest::Client,

    /// Payment service URL (None if not configured)
    pub upstream_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(upstream_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream_url: upstream_url.map(Arc::from),
        }
    }
}
