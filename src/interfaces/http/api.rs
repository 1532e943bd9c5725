//! The public HTTP surface: thin handlers that deserialize, delegate to the
//! service and serialize, plus the mapping from [`GatewayError`] to status
//! codes and JSON envelopes.

use crate::application::service::PaymentService;
use crate::domain::payment::{PaymentRecord, PaymentRequest};
use crate::error::GatewayError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub fn router(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/{id}", get(get_payment))
        .with_state(service)
}

async fn create_payment(
    State(service): State<Arc<PaymentService>>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentRecord>, GatewayError> {
    service.process_payment(request).await.map(Json)
}

async fn get_payment(
    State(service): State<Arc<PaymentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentRecord>, GatewayError> {
    service.get_payment(id).await.map(Json)
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "errors": errors }),
            ),
            GatewayError::NotFound => (StatusCode::NOT_FOUND, json!({ "message": self.to_string() })),
            GatewayError::BadRequest => {
                (StatusCode::BAD_REQUEST, json!({ "message": self.to_string() }))
            }
            GatewayError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "message": self.to_string() }),
            ),
            GatewayError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
