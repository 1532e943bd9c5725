use crate::domain::bank::{BankAuthorizationRequest, BankAuthorizationResult};
use crate::domain::ports::{BankError, BankGateway};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP adapter for the acquiring bank simulator.
///
/// Issues a single `POST {base_url}/payments` per authorization attempt and
/// maps the transport and protocol failure surface onto [`BankError`]:
/// timeouts and connection failures are `ServiceUnavailable`, a 4xx answer
/// is `ClientFault`, a 5xx answer is `ServiceUnavailable`, everything else
/// (including an undecodable body) is `Unknown`.
pub struct HttpBankClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBankClient {
    /// Builds a client against the given base address with a hard per-call
    /// timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BankError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BankError::Unknown(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl BankGateway for HttpBankClient {
    async fn authorize(
        &self,
        request: BankAuthorizationRequest,
    ) -> Result<BankAuthorizationResult, BankError> {
        let url = format!("{}/payments", self.base_url);
        tracing::debug!(
            "Calling bank simulator at {url} for card ending in {}",
            last_four(&request.card_number)
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if status.is_client_error() {
            return Err(BankError::ClientFault(format!("HTTP {status}")));
        }
        if status.is_server_error() {
            return Err(BankError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let result: BankAuthorizationResult = response
            .json()
            .await
            .map_err(|e| BankError::Unknown(format!("invalid bank response: {e}")))?;

        tracing::debug!("Bank simulator response: authorized={}", result.authorized);
        Ok(result)
    }
}

fn classify_transport(error: reqwest::Error) -> BankError {
    if error.is_timeout() || error.is_connect() {
        BankError::ServiceUnavailable(error.to_string())
    } else {
        BankError::Unknown(error.to_string())
    }
}

fn last_four(card_number: &str) -> &str {
    card_number
        .get(card_number.len().saturating_sub(4)..)
        .unwrap_or("****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_four_masks_short_values() {
        assert_eq!(last_four("2222405343248877"), "8877");
        assert_eq!(last_four("877"), "877");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = HttpBankClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
