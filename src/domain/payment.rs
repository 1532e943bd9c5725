use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw inbound payment request.
///
/// Every field is optional so that a missing field surfaces as a validation
/// violation with its own message rather than a deserialization failure.
/// Requests are created per call, never stored, and discarded after
/// orchestration; the full card number and CVV exist nowhere else.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PaymentRequest {
    pub card_number: Option<String>,
    pub expiry_month: Option<i32>,
    pub expiry_year: Option<i32>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    pub cvv: Option<i32>,
}

/// Definitive bank decisions. No other status is ever persisted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Authorized,
    Declined,
}

/// A completed payment as returned to the caller and kept in the store.
///
/// Carries masked card details only and is immutable once stored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}
