use crate::domain::validation::ValidationErrors;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors surfaced to the inbound boundary.
///
/// Every variant carries a stable, machine-classifiable kind and a fixed
/// caller-facing message; internal detail stays in the logs.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// One or more request fields violated a validation rule.
    #[error("Validation failed")]
    ValidationFailed(ValidationErrors),

    #[error("Payment not found. Please check the payment ID and try again.")]
    NotFound,

    /// The bank rejected the translated request as malformed.
    #[error("Payment request validation failed. Please contact support.")]
    BadRequest,

    /// The bank is down, timed out or could not be reached. Safe to retry.
    #[error("Bank service temporarily unavailable. Please try again later or contact support team.")]
    ServiceUnavailable,

    #[error("Internal server error. Please try again or contact support team.")]
    Internal,
}
