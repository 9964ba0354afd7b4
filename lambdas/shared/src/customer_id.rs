//! Customer identifier and its validator
//!
//! A customer id is 3 to 64 characters drawn from ASCII letters, digits,
//! `_` and `-`. The only way to obtain a [`CustomerId`] is through
//! [`validate`], so holding one means the format has been checked.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{Error, Result};

/// Minimum id length in characters
pub const MIN_LEN: usize = 3;
/// Maximum id length in characters
pub const MAX_LEN: usize = 64;

/// A validated customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CustomerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate(Some(s))
    }
}

/// Check a raw string against the customer id format
pub fn is_valid_customer_id(s: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&s.len())
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Validate a raw candidate, keeping the exact input on success
///
/// Absence and malformed input fail the same way.
pub fn validate(raw: Option<&str>) -> Result<CustomerId> {
    match raw {
        Some(s) if is_valid_customer_id(s) => Ok(CustomerId(s.to_string())),
        Some(s) => Err(Error::InvalidFormat(s.to_string())),
        None => Err(Error::InvalidFormat("None".to_string())),
    }
}
