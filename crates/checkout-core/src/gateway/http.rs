//! HTTP Payment Gateway
//!
//! Posts the checkout payload as JSON with `reqwest`. No retries, no timeout.

use async_trait::async_trait;
use serde::Deserialize;

use super::PaymentGateway;
use crate::error::{CheckoutError, Result};
use crate::form::CheckoutRequest;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/checkout";

/// Gateway configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Absolute URL of the checkout endpoint
    pub endpoint: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl GatewayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint at `/api/checkout` under the given origin (e.g. the page's `window.location.origin`)
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}/api/checkout", origin.trim_end_matches('/')))
    }

    pub fn from_env() -> Self {
        std::env::var("CHECKOUT_ENDPOINT")
            .map(Self::new)
            .unwrap_or_default()
    }
}

/// Body the payment service sends with a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Gateway backed by the real payment endpoint
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpPaymentGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        reqwest::Url::parse(&config.endpoint)
            .map_err(|e| CheckoutError::Config(format!("invalid endpoint {:?}: {}", config.endpoint, e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait(?Send)]
impl PaymentGateway for HttpPaymentGateway {
    async fn charge(&self, request: &CheckoutRequest) -> Result<()> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // A body that cannot be read is treated like one that cannot be parsed.
        let body = response.bytes().await.unwrap_or_default();
        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(ErrorBody {
                message: Some(message),
            }) => Err(CheckoutError::Declined { status, message }),
            _ => Err(CheckoutError::MalformedResponse { status }),
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_origin() {
        assert_eq!(
            GatewayConfig::for_origin("https://shop.example/").endpoint,
            "https://shop.example/api/checkout"
        );
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let result = HttpPaymentGateway::new(GatewayConfig::new("/api/checkout"));
        assert!(matches!(result, Err(CheckoutError::Config(_))));
    }
}
