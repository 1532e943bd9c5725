use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use payment_gateway::domain::bank::{BankAuthorizationRequest, BankAuthorizationResult};

/// Spawns a bank simulator lookalike on an ephemeral port and returns its
/// base URL.
///
/// Decisions follow the simulator's convention: a card number ending in an
/// odd digit is authorized, an even digit is declined and a trailing zero
/// answers with a 503.
pub async fn spawn_bank() -> String {
    serve(Router::new().route("/payments", post(simulate))).await
}

/// Spawns a bank stub that answers every request with the given status and
/// raw body.
pub async fn spawn_static_bank(status: StatusCode, body: &'static str) -> String {
    serve(Router::new().route(
        "/payments",
        post(move || async move { (status, [("content-type", "application/json")], body) }),
    ))
    .await
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn simulate(
    Json(request): Json<BankAuthorizationRequest>,
) -> Result<Json<BankAuthorizationResult>, StatusCode> {
    match request.card_number.chars().last() {
        Some('0') => Err(StatusCode::SERVICE_UNAVAILABLE),
        Some(digit) if digit.to_digit(10).is_some_and(|d| d % 2 == 1) => {
            Ok(Json(BankAuthorizationResult {
                authorized: true,
                authorization_code: Some("AUTH123".to_owned()),
            }))
        }
        _ => Ok(Json(BankAuthorizationResult {
            authorized: false,
            authorization_code: None,
        })),
    }
}
