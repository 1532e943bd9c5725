mod common;

use axum::http::StatusCode;
use payment_gateway::domain::bank::BankAuthorizationRequest;
use payment_gateway::domain::ports::{BankError, BankGateway};
use payment_gateway::infrastructure::bank_client::HttpBankClient;
use std::time::Duration;

fn client(base_url: &str) -> HttpBankClient {
    HttpBankClient::new(base_url, Duration::from_secs(2)).unwrap()
}

fn request_for(card_number: &str) -> BankAuthorizationRequest {
    BankAuthorizationRequest {
        card_number: card_number.to_owned(),
        expiry_date: "4/2030".to_owned(),
        currency: "GBP".to_owned(),
        amount: 100,
        cvv: 123,
    }
}

#[tokio::test]
async fn test_authorized_response_is_decoded() {
    let base = common::spawn_bank().await;

    let result = client(&base)
        .authorize(request_for("2222405343248877"))
        .await
        .unwrap();

    assert!(result.authorized);
    assert_eq!(result.authorization_code.as_deref(), Some("AUTH123"));
}

#[tokio::test]
async fn test_declined_response_is_decoded() {
    let base = common::spawn_bank().await;

    let result = client(&base)
        .authorize(request_for("2222405343248112"))
        .await
        .unwrap();

    assert!(!result.authorized);
    assert_eq!(result.authorization_code, None);
}

#[tokio::test]
async fn test_bank_4xx_is_a_client_fault() {
    let base = common::spawn_static_bank(
        StatusCode::BAD_REQUEST,
        r#"{"message": "card_number is invalid"}"#,
    )
    .await;

    let err = client(&base)
        .authorize(request_for("2222405343248877"))
        .await
        .unwrap_err();

    assert!(matches!(err, BankError::ClientFault(_)), "got {err:?}");
}

#[tokio::test]
async fn test_bank_5xx_is_service_unavailable() {
    let base = common::spawn_bank().await;

    let err = client(&base)
        .authorize(request_for("2222405343248880"))
        .await
        .unwrap_err();

    assert!(matches!(err, BankError::ServiceUnavailable(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_service_unavailable() {
    // Bind then drop the listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .authorize(request_for("2222405343248877"))
        .await
        .unwrap_err();

    assert!(matches!(err, BankError::ServiceUnavailable(_)), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_response_body_is_unknown() {
    let base = common::spawn_static_bank(StatusCode::OK, "not json at all").await;

    let err = client(&base)
        .authorize(request_for("2222405343248877"))
        .await
        .unwrap_err();

    assert!(matches!(err, BankError::Unknown(_)), "got {err:?}");
}
