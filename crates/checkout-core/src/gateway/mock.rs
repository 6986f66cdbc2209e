//! Mock Payment Gateway
//!
//! For testing and demo purposes. Answers with a fixed outcome and records
//! every payload it receives.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::cell::RefCell;

use super::PaymentGateway;
use crate::error::{CheckoutError, Result};
use crate::form::CheckoutRequest;

/// What the mock answers with
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockOutcome {
    Approve,
    Decline { status: StatusCode, message: String },
    Malformed(StatusCode),
    Outage,
}

/// Mock gateway with a scripted outcome
pub struct MockPaymentGateway {
    outcome: MockOutcome,
    received: RefCell<Vec<CheckoutRequest>>,
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::approving()
    }
}

impl MockPaymentGateway {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn approving() -> Self {
        Self::new(MockOutcome::Approve)
    }

    pub fn declining(message: impl Into<String>) -> Self {
        Self::new(MockOutcome::Decline {
            status: StatusCode::PAYMENT_REQUIRED,
            message: message.into(),
        })
    }

    pub fn offline() -> Self {
        Self::new(MockOutcome::Outage)
    }

    /// Number of charge attempts seen so far
    pub fn calls(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn received(&self) -> Vec<CheckoutRequest> {
        self.received.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, request: &CheckoutRequest) -> Result<()> {
        self.received.borrow_mut().push(request.clone());

        match &self.outcome {
            MockOutcome::Approve => Ok(()),
            MockOutcome::Decline { status, message } => Err(CheckoutError::Declined {
                status: *status,
                message: message.clone(),
            }),
            MockOutcome::Malformed(status) => Err(CheckoutError::MalformedResponse { status: *status }),
            MockOutcome::Outage => Err(CheckoutError::Transport("connection refused".into())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{CheckoutContext, FormState};

    fn request() -> CheckoutRequest {
        CheckoutRequest::new(&CheckoutContext::default(), &FormState::default())
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let gateway = MockPaymentGateway::approving();
        assert_eq!(gateway.calls(), 0);

        gateway.charge(&request()).await.unwrap();
        assert_eq!(gateway.calls(), 1);
        assert_eq!(gateway.received()[0], request());
    }

    #[tokio::test]
    async fn test_mock_outage() {
        let gateway = MockPaymentGateway::offline();
        let result = gateway.charge(&request()).await;
        assert!(matches!(result, Err(CheckoutError::Transport(_))));
    }

    #[tokio::test]
    async fn test_malformed_status_goes_through_process() {
        let gateway = MockPaymentGateway::new(MockOutcome::Malformed(StatusCode::BAD_GATEWAY));
        let status = crate::gateway::process(&gateway, &request()).await;
        assert_eq!(status.message(), Some("Payment failed: Bad Gateway"));
    }
}
