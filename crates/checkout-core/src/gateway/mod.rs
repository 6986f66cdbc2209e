//! Payment Gateway
//!
//! Abstraction over the service that accepts the checkout POST.

mod http;
mod mock;

pub use http::{GatewayConfig, HttpPaymentGateway};
pub use mock::{MockOutcome, MockPaymentGateway};

use async_trait::async_trait;

use crate::error::Result;
use crate::form::CheckoutRequest;
use crate::status::SubmissionStatus;

/// Payment gateway trait (Strategy pattern)
///
/// Futures are not `Send`: the browser drives them with `spawn_local`.
#[async_trait(?Send)]
pub trait PaymentGateway {
    /// Submit one checkout payload. `Ok` means the service answered 2xx.
    async fn charge(&self, request: &CheckoutRequest) -> Result<()>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Send an already validated request and turn the outcome into a terminal status
pub async fn process<G>(gateway: &G, request: &CheckoutRequest) -> SubmissionStatus
where
    G: PaymentGateway + ?Sized,
{
    tracing::debug!(
        gateway = gateway.name(),
        user_id = ?request.user_id,
        plan_id = ?request.plan_id,
        "Submitting payment"
    );

    match gateway.charge(request).await {
        Ok(()) => {
            tracing::info!(gateway = gateway.name(), "Payment accepted");
            SubmissionStatus::Succeeded
        }
        Err(e) => {
            tracing::warn!(gateway = gateway.name(), "Payment failed: {}", e);
            SubmissionStatus::Failed(e.user_message())
        }
    }
}
