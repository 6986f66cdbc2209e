//! Checkout Error Types

use reqwest::StatusCode;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Shown when the request never completes.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// Checkout-related errors
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// One or more fields failed format validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Payment service answered with a non-2xx status and a reason
    #[error("Payment declined ({status}): {message}")]
    Declined { status: StatusCode, message: String },

    /// A previous attempt has not finished yet
    #[error("Payment already pending")]
    AlreadyPending,

    /// Non-2xx response whose body carried no readable reason
    #[error("Malformed error response ({status})")]
    MalformedResponse { status: StatusCode },

    /// Request never reached or never returned from the payment service
    #[error("Transport error: {0}")]
    Transport(String),

    /// Field name outside cardNumber/expiryDate/cvv
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Declined { message, .. } => format!("Payment failed: {message}"),
            Self::MalformedResponse { status } => status
                .canonical_reason()
                .map_or_else(|| "Payment failed.".into(), |reason| format!("Payment failed: {reason}")),
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE.into(),
            Self::Validation(_) => "Please correct the highlighted fields.".into(),
            Self::AlreadyPending => "Your payment is still being processed.".into(),
            Self::UnknownField(_) | Self::Config(_) => "Checkout is not available right now.".into(),
        }
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
