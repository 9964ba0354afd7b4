//! Customer IDs Core Library
//!
//! Shared functionality for the customer id Lambda functions including:
//! - Customer id validation and extraction
//! - DynamoDB repository and EventBridge publisher
//! - HTTP and workflow handler compositions
//! - Configuration, logging and error types

pub mod config;
pub mod customer_id;
pub mod dynamo;
pub mod errors;
pub mod events;
pub mod extract;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod models;
pub mod repository;
pub mod workflow;


pub use config::Config;
pub use customer_id::{is_valid_customer_id, validate, CustomerId};
pub use dynamo::DynamoRepository;
pub use errors::{Error, Result};
pub use events::{EventBridgePublisher, EventPublisher, EventRouting};
pub use http::ApiResponse;
pub use models::*;
pub use repository::{Attributes, CustomerRepository};
