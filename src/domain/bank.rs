use serde::{Deserialize, Serialize};

/// Wire-level authorization request sent to the acquiring bank.
///
/// Structurally distinct from [`PaymentRequest`](super::payment::PaymentRequest)
/// so the external contract can evolve independently of the inbound API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BankAuthorizationRequest {
    pub card_number: String,
    /// Composed "month/year" expiry, e.g. "4/2030".
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: i32,
}

/// The bank's decision for a single authorization attempt.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BankAuthorizationResult {
    pub authorized: bool,
    /// Present only when the payment was authorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_bank_field_names() {
        let request = BankAuthorizationRequest {
            card_number: "2222405343248877".to_owned(),
            expiry_date: "4/2030".to_owned(),
            currency: "GBP".to_owned(),
            amount: 100,
            cvv: 123,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["card_number"], "2222405343248877");
        assert_eq!(json["expiry_date"], "4/2030");
        assert_eq!(json["cvv"], 123);
    }

    #[test]
    fn test_result_decodes_without_authorization_code() {
        let result: BankAuthorizationResult =
            serde_json::from_str(r#"{"authorized": false}"#).unwrap();

        assert!(!result.authorized);
        assert_eq!(result.authorization_code, None);
    }

    #[test]
    fn test_result_decodes_authorization_code() {
        let result: BankAuthorizationResult =
            serde_json::from_str(r#"{"authorized": true, "authorization_code": "AUTH123"}"#)
                .unwrap();

        assert!(result.authorized);
        assert_eq!(result.authorization_code.as_deref(), Some("AUTH123"));
    }
}
