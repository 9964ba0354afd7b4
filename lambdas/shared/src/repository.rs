//! Storage capability used by the handlers

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::customer_id::CustomerId;
use crate::errors::Result;

/// Extra string attributes merged into a stored record
pub type Attributes = BTreeMap<String, String>;

/// Conditional operations over a table keyed by customer id
///
/// Implementations must evaluate the put and delete preconditions atomically
/// in the store. A precondition failure is reported as
/// [`Error::AlreadyExists`](crate::Error::AlreadyExists) or
/// [`Error::NotFound`](crate::Error::NotFound); anything else is an
/// infrastructure error.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a record, failing if one with the same key exists
    async fn put(&self, id: &CustomerId, attrs: Option<Attributes>) -> Result<()>;

    /// Strongly consistent existence check
    async fn exists(&self, id: &CustomerId) -> Result<bool>;

    /// Remove a record, failing if none exists
    async fn delete(&self, id: &CustomerId) -> Result<()>;
}
