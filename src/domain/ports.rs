use super::bank::{BankAuthorizationRequest, BankAuthorizationResult};
use super::payment::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Failure kinds a bank gateway signals instead of returning a result.
///
/// The orchestrator's error classification depends on the distinction
/// between these kinds; adapters must not collapse them.
#[derive(Error, Debug)]
pub enum BankError {
    /// The bank rejected the request as malformed (4xx).
    #[error("bank rejected the authorization request: {0}")]
    ClientFault(String),
    /// The bank reported a server-side failure, or could not be reached.
    #[error("bank service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Any other unexpected failure during the call or response decoding.
    #[error("unexpected bank gateway failure: {0}")]
    Unknown(String),
}

/// Outbound port to the acquiring bank. Adapters perform no retries;
/// retry policy, if any, belongs to the caller.
#[async_trait]
pub trait BankGateway: Send + Sync {
    async fn authorize(
        &self,
        request: BankAuthorizationRequest,
    ) -> std::result::Result<BankAuthorizationResult, BankError>;
}

/// Keyed store of completed payment records. Records are inserted exactly
/// once under a freshly generated identifier and never mutated.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert(&self, record: PaymentRecord) -> Result<()>;
    async fn get(&self, id: Uuid) -> Result<Option<PaymentRecord>>;
}

pub type BankGatewayBox = Box<dyn BankGateway>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
