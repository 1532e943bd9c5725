use crate::domain::bank::BankAuthorizationRequest;
use crate::domain::payment::{PaymentRecord, PaymentRequest, PaymentStatus};
use crate::domain::ports::{BankError, BankGatewayBox, PaymentStoreBox};
use crate::domain::validation;
use crate::error::{GatewayError, Result};
use chrono::Utc;
use uuid::Uuid;

/// The main entry point for payment processing.
///
/// `PaymentService` validates inbound requests, asks the bank for an
/// authorization decision and records the outcome. Only definitive outcomes
/// (authorized or declined) produce a stored record; every technical failure
/// is classified and returned without touching the store.
pub struct PaymentService {
    bank: BankGatewayBox,
    store: PaymentStoreBox,
}

impl PaymentService {
    /// Creates a new `PaymentService` instance.
    ///
    /// # Arguments
    ///
    /// * `bank` - The gateway used to request authorization decisions.
    /// * `store` - The store for completed payment records.
    pub fn new(bank: BankGatewayBox, store: PaymentStoreBox) -> Self {
        Self { bank, store }
    }

    /// Runs a payment through validation, bank authorization and storage.
    ///
    /// Validation failures terminate before an identifier is generated or
    /// any downstream call is made.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<PaymentRecord> {
        let payment = validation::validate(&request, Utc::now().date_naive())
            .map_err(GatewayError::ValidationFailed)?;

        tracing::info!("Processing payment for card ending in {}", payment.last_four());

        let payment_id = Uuid::new_v4();
        let bank_request = BankAuthorizationRequest {
            card_number: payment.card_number.clone(),
            expiry_date: payment.expiry_date(),
            currency: payment.currency.clone(),
            amount: payment.amount,
            cvv: payment.cvv,
        };

        let status = match self.bank.authorize(bank_request).await {
            Ok(decision) if decision.authorized => {
                // The authorization code is observability-only, never persisted.
                tracing::info!(
                    "Payment {payment_id} authorized with code: {}",
                    decision.authorization_code.as_deref().unwrap_or("<none>")
                );
                PaymentStatus::Authorized
            }
            Ok(_) => {
                tracing::info!("Payment {payment_id} declined");
                PaymentStatus::Declined
            }
            Err(BankError::ClientFault(detail)) => {
                // Should not happen with a validated request, but the bank's
                // contract may tighten independently of ours.
                tracing::error!("Bank client error for payment {payment_id}: {detail}");
                return Err(GatewayError::BadRequest);
            }
            Err(BankError::ServiceUnavailable(detail)) => {
                tracing::error!(
                    "Bank service unavailable for payment {payment_id}: {detail}. \
                     Transaction not completed."
                );
                return Err(GatewayError::ServiceUnavailable);
            }
            Err(BankError::Unknown(detail)) => {
                tracing::error!(
                    "Unexpected error processing payment {payment_id}: {detail}. \
                     Transaction not completed."
                );
                return Err(GatewayError::Internal);
            }
        };

        let record = PaymentRecord {
            id: payment_id,
            status,
            card_number_last_four: payment.card_number_last_four(),
            expiry_month: payment.expiry_month,
            expiry_year: payment.expiry_year,
            currency: payment.currency,
            amount: payment.amount,
        };

        self.store.insert(record.clone()).await?;
        Ok(record)
    }

    /// Looks up a previously processed payment by its identifier.
    pub async fn get_payment(&self, id: Uuid) -> Result<PaymentRecord> {
        tracing::debug!("Requesting access to payment with ID {id}");
        self.store.get(id).await?.ok_or(GatewayError::NotFound)
    }
}
