//! Error types for the customer id service

use thiserror::Error;

/// Result type alias using the service Error
pub type Result<T> = std::result::Result<T, Error>;

/// Customer id service error types
#[derive(Error, Debug)]
pub enum Error {
    /// Customer id missing or not matching `^[A-Za-z0-9_-]{3,64}$`
    #[error("Invalid or missing 'id': {0}")]
    InvalidFormat(String),

    /// Conditional put found an existing record
    #[error("Customer {0} already exists")]
    AlreadyExists(String),

    /// Conditional delete or existence pre-check found no record
    #[error("Customer {0} not found")]
    NotFound(String),

    /// DynamoDB error
    #[error("Database error: {0}")]
    Database(String),

    /// DynamoDB serialization error
    #[error("DynamoDB serialization error: {0}")]
    DynamoSerialization(String),

    /// EventBridge error or rejected entry
    #[error("Publish error: {0}")]
    Publish(String),

    /// JSON Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidFormat(_) => "invalid_customer_id",
            Error::AlreadyExists(_) => "already_exists",
            Error::NotFound(_) => "not_found",
            Error::Database(_) => "database_error",
            Error::DynamoSerialization(_) => "serialization_error",
            Error::Publish(_) => "publish_error",
            Error::Serialization(_) => "serialization_error",
        }
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidFormat(_) => 400,
            Error::AlreadyExists(_) => 409,
            Error::NotFound(_) => 404,
            Error::Database(_) => 500,
            Error::DynamoSerialization(_) => 500,
            Error::Publish(_) => 500,
            Error::Serialization(_) => 500,
        }
    }

    /// True for failures of the store or bus rather than of the caller's input
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Error::Database(_) | Error::DynamoSerialization(_) | Error::Publish(_)
        )
    }
}
