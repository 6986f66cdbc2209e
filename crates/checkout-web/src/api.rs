//! API Client

use checkout_core::{CheckoutRequest, GatewayConfig, HttpPaymentGateway, SubmissionStatus};

/// `/api/checkout` on the origin that served the page
fn gateway_config() -> GatewayConfig {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    GatewayConfig::for_origin(&origin)
}

/// Post a validated checkout request and map the outcome to a terminal status
pub async fn submit_checkout(request: CheckoutRequest) -> SubmissionStatus {
    match HttpPaymentGateway::new(gateway_config()) {
        Ok(gateway) => checkout_core::process(&gateway, &request).await,
        Err(e) => SubmissionStatus::Failed(e.user_message()),
    }
}
