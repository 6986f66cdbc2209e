//! Contract tests for HttpPaymentGateway against a mocked payment endpoint.
//!
//! | Response | Expected status |
//! |----------|-----------------|
//! | 200 | `Succeeded` |
//! | 402 `{"message": ...}` | `Failed("Payment failed: ...")` |
//! | 500 non-JSON | `Failed("Payment failed: Internal Server Error")` |
//! | 400 JSON without `message` | `Failed("Payment failed: Bad Request")` |
//! | connection refused | `Failed(TRANSPORT_FAILURE_MESSAGE)` |

use checkout_core::error::TRANSPORT_FAILURE_MESSAGE;
use checkout_core::{
    CheckoutContext, CheckoutController, CheckoutRequest, Field, FormState, GatewayConfig,
    HttpPaymentGateway, SubmissionStatus, process,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpPaymentGateway {
    HttpPaymentGateway::new(GatewayConfig::for_origin(&server.uri())).unwrap()
}

fn valid_request() -> CheckoutRequest {
    let form = FormState {
        card_number: "4242 4242 4242 4242".into(),
        expiry_date: "12/25".into(),
        cvv: "123".into(),
    };
    CheckoutRequest::new(&CheckoutContext::new(Some("u1".into()), Some("pro".into())), &form)
}

#[tokio::test]
async fn success_posts_json_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "userId": "u1",
            "planId": "pro",
            "cardNumber": "4242 4242 4242 4242",
            "expiryDate": "12/25",
            "cvv": "123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
        .expect(1)
        .mount(&server)
        .await;

    let status = process(&gateway_for(&server), &valid_request()).await;
    assert_eq!(status, SubmissionStatus::Succeeded);
    assert_eq!(status.message(), Some("Payment successful!"));
}

#[tokio::test]
async fn any_2xx_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let status = process(&gateway_for(&server), &valid_request()).await;
    assert_eq!(status, SubmissionStatus::Succeeded);
}

#[tokio::test]
async fn decline_uses_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(
            ResponseTemplate::new(402).set_body_json(serde_json::json!({"message": "card declined"})),
        )
        .mount(&server)
        .await;

    let status = process(&gateway_for(&server), &valid_request()).await;
    assert_eq!(status, SubmissionStatus::Failed("Payment failed: card declined".into()));
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let status = process(&gateway_for(&server), &valid_request()).await;
    assert_eq!(status, SubmissionStatus::Failed("Payment failed: Internal Server Error".into()));
}

#[tokio::test]
async fn error_body_without_message_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "nope"})))
        .mount(&server)
        .await;

    let status = process(&gateway_for(&server), &valid_request()).await;
    assert_eq!(status, SubmissionStatus::Failed("Payment failed: Bad Request".into()));
}

#[tokio::test]
async fn network_outage_reports_generic_failure() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpPaymentGateway::new(GatewayConfig::for_origin(&format!("http://{addr}"))).unwrap();
    let mut controller = CheckoutController::new(CheckoutContext::default(), gateway);
    controller.update_field(Field::CardNumber, "4242424242424242");
    controller.update_field(Field::ExpiryDate, "12/25");
    controller.update_field(Field::Cvv, "123");

    let status = controller.submit().await.clone();
    assert_eq!(status, SubmissionStatus::Failed(TRANSPORT_FAILURE_MESSAGE.into()));
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn invalid_form_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = CheckoutController::new(CheckoutContext::default(), gateway_for(&server));
    controller.update_field(Field::CardNumber, "4242424242424242");
    controller.update_field(Field::ExpiryDate, "00/25");
    controller.update_field(Field::Cvv, "123");

    let status = controller.submit().await.clone();
    assert_eq!(status, SubmissionStatus::Idle);
    assert!(!controller.errors().expiry_date.is_empty());
}
