//! Customer IDs Integration Tests
//!
//! These tests run against a deployed API (set the CUSTOMER_IDS_API_URL
//! environment variable, or put it in a `.env` file). Without it every test
//! returns early.
//!
//! Run with: cargo test --package customer-ids-integration-tests

pub mod client;
pub mod fixtures;

pub use client::CustomerIdsClient;
pub use fixtures::*;
