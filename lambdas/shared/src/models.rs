//! Domain models for the customer id service
//!
//! These types represent:
//! - Stored records: one DynamoDB item per customer id
//! - Submission events: EventBridge detail payloads
//! - Response payloads for the HTTP and workflow handlers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::customer_id::CustomerId;

/// Primary key attribute of the customer id table
pub const KEY_ATTRIBUTE: &str = "id";

/// A persisted customer id with optional extra attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl StoredRecord {
    /// Build a record, dropping any attribute that would shadow the key
    pub fn new(id: &CustomerId, attributes: Option<BTreeMap<String, String>>) -> Self {
        let mut attributes = attributes.unwrap_or_default();
        attributes.remove(KEY_ATTRIBUTE);
        Self {
            id: id.as_str().to_string(),
            attributes,
        }
    }
}

/// EventBridge detail for an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub id: String,
}

/// What the bus returned for a published entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    pub event_id: Option<String>,
}

/// 200 body for the existence check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
    pub id: String,
}

/// 201/200 body for create and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub id: String,
}

/// 202 body for submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedResponse {
    pub status: String,
    pub id: String,
}

/// Output of the validate-exists workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistsOutcome {
    pub exists: bool,
}

/// Output of the insert-id workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    pub inserted: bool,
}

/// Output of the log-event workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOutcome {
    pub logged: bool,
}
