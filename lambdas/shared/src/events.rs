//! EventBridge publishing for accepted submissions

use async_trait::async_trait;
use aws_sdk_eventbridge::error::DisplayErrorContext;
use aws_sdk_eventbridge::operation::put_events::PutEventsOutput;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client;
use tracing::debug;

use crate::config::Config;
use crate::customer_id::CustomerId;
use crate::errors::{Error, Result};
use crate::models::{PublishReceipt, SubmissionEvent};

/// Publishes one submission event per accepted customer id
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, id: &CustomerId) -> Result<PublishReceipt>;
}

/// Static routing metadata attached to every entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRouting {
    pub bus_name: String,
    pub source: String,
    pub detail_type: String,
}

impl EventRouting {
    pub fn from_config(config: &Config) -> Self {
        Self {
            bus_name: config.event_bus_name.clone(),
            source: config.event_source.clone(),
            detail_type: config.event_detail_type.clone(),
        }
    }

    /// Build the single `PutEvents` entry for a customer id
    pub fn entry(&self, id: &CustomerId) -> Result<PutEventsRequestEntry> {
        let detail = serde_json::to_string(&SubmissionEvent {
            id: id.as_str().to_string(),
        })?;

        Ok(PutEventsRequestEntry::builder()
            .event_bus_name(&self.bus_name)
            .source(&self.source)
            .detail_type(&self.detail_type)
            .detail(detail)
            .build())
    }
}

/// EventBridge-backed [`EventPublisher`]
pub struct EventBridgePublisher {
    client: Client,
    routing: EventRouting,
}

impl EventBridgePublisher {
    pub fn new(client: Client, config: &Config) -> Self {
        Self::with_routing(client, EventRouting::from_config(config))
    }

    pub fn with_routing(client: Client, routing: EventRouting) -> Self {
        Self { client, routing }
    }
}

#[async_trait]
impl EventPublisher for EventBridgePublisher {
    async fn publish(&self, id: &CustomerId) -> Result<PublishReceipt> {
        let entry = self.routing.entry(id)?;

        let output = self
            .client
            .put_events()
            .entries(entry)
            .send()
            .await
            .map_err(|e| Error::Publish(DisplayErrorContext(&e).to_string()))?;

        let receipt = receipt(&output)?;
        debug!(customer_id = %id, event_id = ?receipt.event_id, bus = %self.routing.bus_name, "Event published");

        Ok(receipt)
    }
}

/// Read the single result entry of a `PutEvents` call
///
/// Rejections come back per entry rather than as a request failure.
pub(crate) fn receipt(output: &PutEventsOutput) -> Result<PublishReceipt> {
    let result = output.entries().first();
    if let Some(code) = result.and_then(|r| r.error_code()) {
        let message = result.and_then(|r| r.error_message()).unwrap_or_default();
        return Err(Error::Publish(format!("{}: {}", code, message)));
    }

    Ok(PublishReceipt {
        event_id: result.and_then(|r| r.event_id()).map(str::to_string),
    })
}
