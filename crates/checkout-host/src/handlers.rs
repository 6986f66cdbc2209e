//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub upstream_configured: bool,
}

/// Same shape the payment service uses, so the page can show `message`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

fn error_response(status: StatusCode, message: &str, code: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
            code: code.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        upstream_configured: state.upstream_url.is_some(),
    })
}

/// Relay a checkout request to the payment service.
///
/// Status and body come back verbatim. The body holds card data and is never logged.
pub async fn relay_checkout(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(upstream) = state.upstream_url.as_deref() else {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        );
    };

    let upstream_response = match state
        .client
        .post(upstream)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Payment service unreachable: {}", e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Payment service unavailable",
                "UPSTREAM_UNAVAILABLE",
            );
        }
    };

    let status = upstream_response.status();
    let content_type = upstream_response.headers().get(CONTENT_TYPE).cloned();
    tracing::info!(status = status.as_u16(), "Payment service answered");

    let bytes = match upstream_response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed reading payment service response: {}", e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Payment service unavailable",
                "UPSTREAM_UNAVAILABLE",
            );
        }
    };

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
