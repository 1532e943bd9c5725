//! Request validation.
//!
//! Field rules run in a fixed order and collect every violation into a
//! single field-to-message map. The cross-field expiry rule runs as a
//! separate step afterwards and only once month and year are individually in
//! range, so an out-of-range month never produces a second expiry error.

use super::payment::PaymentRequest;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

const CURRENCIES: [&str; 3] = ["GBP", "USD", "CNY"];

/// Violations keyed by the boundary field name, e.g. `cardNumber`.
///
/// The cross-field expiry violation attaches to the request as a whole under
/// the `expiryDate` key.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// A payment request that passed every rule, with concrete field types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPayment {
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: i32,
}

impl ValidPayment {
    /// Last four digits of the card number, for masked display.
    pub fn last_four(&self) -> &str {
        &self.card_number[self.card_number.len() - 4..]
    }

    /// Last four digits as a number, the shape recorded on the payment.
    pub fn card_number_last_four(&self) -> u16 {
        // All digits by construction.
        self.last_four().parse().unwrap_or_default()
    }

    /// Composed "month/year" expiry string for the bank's wire format.
    pub fn expiry_date(&self) -> String {
        format!("{}/{}", self.expiry_month, self.expiry_year)
    }
}

/// Validates a raw request against today's calendar date.
///
/// Pure function of its inputs: the same request and date always yield the
/// same outcome. The minimum accepted expiry year is the current year; the
/// cross-field rule then requires the composed year-month to not lie before
/// the current month.
pub fn validate(
    request: &PaymentRequest,
    today: NaiveDate,
) -> Result<ValidPayment, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let card_number = check_card_number(request.card_number.as_deref(), &mut errors);
    let expiry_month = check_expiry_month(request.expiry_month, &mut errors);
    let expiry_year = check_expiry_year(request.expiry_year, today.year(), &mut errors);
    let currency = check_currency(request.currency.as_deref(), &mut errors);
    let amount = check_amount(request.amount, &mut errors);
    let cvv = check_cvv(request.cvv, &mut errors);

    if let (Some(month), Some(year)) = (expiry_month, expiry_year)
        && !expires_in_future(month, year, today)
    {
        errors.insert("expiryDate", "Expiry date must be in the future");
    }

    match (card_number, expiry_month, expiry_year, currency, amount, cvv) {
        (Some(card_number), Some(expiry_month), Some(expiry_year), Some(currency), Some(amount), Some(cvv))
            if errors.is_empty() =>
        {
            Ok(ValidPayment {
                card_number,
                expiry_month,
                expiry_year,
                currency,
                amount,
                cvv,
            })
        }
        _ => Err(errors),
    }
}

fn check_card_number(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    let Some(value) = value else {
        errors.insert("cardNumber", "Card number is required");
        return None;
    };
    if (14..=19).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit()) {
        Some(value.to_owned())
    } else {
        errors.insert("cardNumber", "Card number must be between 14-19 digits");
        None
    }
}

fn check_expiry_month(value: Option<i32>, errors: &mut ValidationErrors) -> Option<u32> {
    let Some(value) = value else {
        errors.insert("expiryMonth", "Expiry month is required");
        return None;
    };
    if (1..=12).contains(&value) {
        Some(value as u32)
    } else {
        errors.insert("expiryMonth", "Expiry month must be between 1 and 12");
        None
    }
}

fn check_expiry_year(
    value: Option<i32>,
    min_year: i32,
    errors: &mut ValidationErrors,
) -> Option<i32> {
    let Some(value) = value else {
        errors.insert("expiryYear", "Expiry year is required");
        return None;
    };
    if value >= min_year {
        Some(value)
    } else {
        errors.insert("expiryYear", format!("Expiry year must be {min_year} or later"));
        None
    }
}

fn check_currency(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    let Some(value) = value else {
        errors.insert("currency", "Currency is required");
        return None;
    };
    if CURRENCIES.contains(&value) {
        Some(value.to_owned())
    } else {
        errors.insert("currency", "Currency must be one of: GBP, USD, CNY");
        None
    }
}

fn check_amount(value: Option<i64>, errors: &mut ValidationErrors) -> Option<i64> {
    let Some(value) = value else {
        errors.insert("amount", "Amount is required");
        return None;
    };
    if value > 0 {
        Some(value)
    } else {
        errors.insert("amount", "Amount must be greater than 0");
        None
    }
}

fn check_cvv(value: Option<i32>, errors: &mut ValidationErrors) -> Option<i32> {
    let Some(value) = value else {
        errors.insert("cvv", "CVV is required");
        return None;
    };
    if (100..=9999).contains(&value) {
        Some(value)
    } else {
        errors.insert("cvv", "CVV must be between 3-4 digits");
        None
    }
}

/// True when the composed expiry year-month is the current month or later.
/// A year-month that cannot be composed counts as expired.
fn expires_in_future(month: u32, year: i32, today: NaiveDate) -> bool {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(expiry) => (expiry.year(), expiry.month()) >= (today.year(), today.month()),
        None => false,
    }
}
