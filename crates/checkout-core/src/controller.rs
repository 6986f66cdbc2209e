//! Checkout Form Controller
//!
//! Owns the form, the last validation result and the submission status for
//! one page visit. Validation gates every network call.

use crate::error::{CheckoutError, Result};
use crate::form::{CheckoutContext, CheckoutRequest, Field, FormState};
use crate::gateway::{PaymentGateway, process};
use crate::status::SubmissionStatus;
use crate::validation::ValidationErrors;

/// Gate every submit attempt goes through, in the controller and in the page.
///
/// Refuses with `AlreadyPending` while an attempt is in flight and with
/// `Validation` when any field fails; otherwise yields the payload to send.
pub fn begin_submit(
    status: &SubmissionStatus,
    form: &FormState,
    context: &CheckoutContext,
) -> Result<CheckoutRequest> {
    if status.is_pending() {
        return Err(CheckoutError::AlreadyPending);
    }
    form.to_request(context)
}

/// Holds `Pending` for the duration of one request.
///
/// If the submit future is dropped before an outcome arrives, the status
/// falls back to `Idle` so the form can be submitted again.
struct PendingGuard<'a> {
    status: &'a mut SubmissionStatus,
}

impl<'a> PendingGuard<'a> {
    fn arm(status: &'a mut SubmissionStatus) -> Self {
        *status = SubmissionStatus::Pending;
        Self { status }
    }

    fn settle(self, outcome: SubmissionStatus) {
        *self.status = outcome;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.status.is_pending() {
            tracing::debug!("Submit abandoned before the payment service answered");
            *self.status = SubmissionStatus::Idle;
        }
    }
}

pub struct CheckoutController<G> {
    context: CheckoutContext,
    form: FormState,
    errors: ValidationErrors,
    status: SubmissionStatus,
    gateway: G,
}

impl<G: PaymentGateway> CheckoutController<G> {
    pub fn new(context: CheckoutContext, gateway: G) -> Self {
        tracing::info!(user_id = ?context.user_id, plan_id = ?context.plan_id, "Checkout opened");
        Self {
            context,
            form: FormState::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            gateway,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.form.update_named(name, value)
    }

    pub fn validate(&self) -> ValidationErrors {
        self.form.validate()
    }

    /// Validate, then charge if every field passes.
    ///
    /// A failed validation stores the errors and leaves the status untouched.
    pub async fn submit(&mut self) -> &SubmissionStatus {
        let request = match begin_submit(&self.status, &self.form, &self.context) {
            Ok(request) => request,
            Err(CheckoutError::Validation(errors)) => {
                tracing::debug!(errors = %errors, "Submit blocked by validation");
                self.errors = errors;
                return &self.status;
            }
            Err(e) => {
                tracing::debug!("Submit refused: {}", e);
                return &self.status;
            }
        };

        self.errors = ValidationErrors::default();
        let guard = PendingGuard::arm(&mut self.status);
        let outcome = process(&self.gateway, &request).await;
        guard.settle(outcome);
        &self.status
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub const fn context(&self) -> &CheckoutContext {
        &self.context
    }

    /// Errors from the most recent submit attempt
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub const fn is_loading(&self) -> bool {
        self.status.is_pending()
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }
}
