//! # checkout-core
//!
//! Card payment form logic for the store checkout page: field state, format
//! validation, payment submission and outcome reporting.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌──────────────┐   ┌────────────────────┐
//! │  Input   │──▶│ FormState │──▶│  validate()  │──▶│ PaymentGateway     │
//! │ (fields) │   │           │   │  (gate)      │   │ POST /api/checkout │
//! └──────────┘   └───────────┘   └──────────────┘   └─────────┬──────────┘
//!                                                             ▼
//!                                                   SubmissionStatus
//! ```
//!
//! The `PaymentGateway` trait lets the same controller run against the real
//! endpoint (`HttpPaymentGateway`) or a scripted one (`MockPaymentGateway`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutContext, CheckoutController, Field, HttpPaymentGateway};
//!
//! let context = CheckoutContext::from_query("userId=u1&planId=pro");
//! let mut controller = CheckoutController::new(context, HttpPaymentGateway::from_env()?);
//!
//! controller.update_field(Field::CardNumber, "4242 4242 4242 4242");
//! controller.update_field(Field::ExpiryDate, "12/25");
//! controller.update_field(Field::Cvv, "123");
//!
//! let status = controller.submit().await;
//! ```

pub mod controller;
pub mod error;
pub mod form;
pub mod gateway;
pub mod status;
pub mod validation;

pub use controller::{CheckoutController, begin_submit};
pub use error::{CheckoutError, Result};
pub use form::{CheckoutContext, CheckoutRequest, Field, FormState};
pub use gateway::{GatewayConfig, HttpPaymentGateway, MockPaymentGateway, PaymentGateway, process};
pub use status::SubmissionStatus;
pub use validation::{ValidationErrors, validate};
