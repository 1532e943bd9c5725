//! Application layer containing the payment orchestration logic.
//!
//! This module defines the `PaymentService` which acts as the primary entry
//! point for processing and retrieving payments. Dependencies come in
//! through the domain ports, so the orchestration can be exercised against
//! test doubles.

pub mod service;
