//! Adapters backing the domain ports: the in-memory payment store and the
//! HTTP client for the bank simulator.

pub mod bank_client;
pub mod in_memory;
