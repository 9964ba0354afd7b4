//! DynamoDB operations for customer ids
//!
//! One item per customer id:
//!
//! | id (PK)        | other attributes            |
//! |----------------|-----------------------------|
//! | `{customer_id}`| optional, e.g. `created_at` |
//!
//! Puts and deletes carry a condition expression so the existence check and
//! the write happen in a single request.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::to_item;
use tracing::debug;

use crate::config::Config;
use crate::customer_id::CustomerId;
use crate::errors::{Error, Result};
use crate::models::{StoredRecord, KEY_ATTRIBUTE};
use crate::repository::{Attributes, CustomerRepository};

const KEY_PLACEHOLDER: &str = "#id";
const PUT_CONDITION: &str = "attribute_not_exists(#id)";
const DELETE_CONDITION: &str = "attribute_exists(#id)";

/// DynamoDB-backed [`CustomerRepository`]
pub struct DynamoRepository {
    client: Client,
    table_name: String,
}

impl DynamoRepository {
    /// Create a repository over the configured table
    pub fn new(client: Client, config: &Config) -> Self {
        Self::with_table_name(client, config.table_name.clone())
    }

    /// Create with explicit table name (for testing)
    pub fn with_table_name(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &CustomerId) -> AttributeValue {
        AttributeValue::S(id.as_str().to_string())
    }
}

/// Serialize a record into a DynamoDB item
pub(crate) fn record_item(
    id: &CustomerId,
    attrs: Option<Attributes>,
) -> Result<HashMap<String, AttributeValue>> {
    to_item(StoredRecord::new(id, attrs)).map_err(|e| Error::DynamoSerialization(e.to_string()))
}

/// Map an SDK failure, turning a failed condition into the given domain error
fn map_sdk_error<E, R>(
    err: SdkError<E, R>,
    is_condition_failure: impl FnOnce(&E) -> bool,
    on_condition_failure: impl FnOnce() -> Error,
) -> Error
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if err.as_service_error().is_some_and(is_condition_failure) {
        on_condition_failure()
    } else {
        Error::Database(DisplayErrorContext(&err).to_string())
    }
}

/// A failed `attribute_not_exists` condition means the id is already stored
fn put_error<R: std::fmt::Debug>(id: &CustomerId, err: SdkError<PutItemError, R>) -> Error {
    map_sdk_error(
        err,
        |se| se.is_conditional_check_failed_exception(),
        || Error::AlreadyExists(id.to_string()),
    )
}

/// A failed `attribute_exists` condition means there was nothing to delete
fn delete_error<R: std::fmt::Debug>(id: &CustomerId, err: SdkError<DeleteItemError, R>) -> Error {
    map_sdk_error(
        err,
        |se| se.is_conditional_check_failed_exception(),
        || Error::NotFound(id.to_string()),
    )
}

#[async_trait]
impl CustomerRepository for DynamoRepository {
    async fn put(&self, id: &CustomerId, attrs: Option<Attributes>) -> Result<()> {
        let item = record_item(id, attrs)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(PUT_CONDITION)
            .expression_attribute_names(KEY_PLACEHOLDER, KEY_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| put_error(id, e))?;

        debug!(customer_id = %id, table = %self.table_name, "Conditional put succeeded");
        Ok(())
    }

    async fn exists(&self, id: &CustomerId) -> Result<bool> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(id))
            .consistent_read(true)
            .projection_expression(KEY_PLACEHOLDER)
            .expression_attribute_names(KEY_PLACEHOLDER, KEY_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| Error::Database(DisplayErrorContext(&e).to_string()))?;

        Ok(result.item.is_some())
    }

    async fn delete(&self, id: &CustomerId) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(id))
            .condition_expression(DELETE_CONDITION)
            .expression_attribute_names(KEY_PLACEHOLDER, KEY_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| delete_error(id, e))?;

        debug!(customer_id = %id, table = %self.table_name, "Conditional delete succeeded");
        Ok(())
    }
}
