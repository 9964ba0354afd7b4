//! Customer IDs Submit Lambda
//!
//! Handles POST /customers
//!
//! Publishes a submission event to EventBridge; the id is read from the JSON
//! body first, then the path, then the `id` header.

use aws_sdk_eventbridge::Client;
use customer_ids_core::{handlers, logging, Config, EventBridgePublisher};
use lambda_http::{run, service_fn, Body, Error as LambdaError, Request, Response};
use tracing::info;

async fn handler(
    publisher: &EventBridgePublisher,
    event: Request,
) -> Result<Response<Body>, LambdaError> {
    handlers::submit_customer_id(publisher, &event)
        .await
        .into_response()
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();
    logging::init(&config);

    let sdk_config = config.sdk_config().await;
    let publisher = EventBridgePublisher::new(Client::new(&sdk_config), &config);
    info!(
        bus = %config.event_bus_name,
        source = %config.event_source,
        detail_type = %config.event_detail_type,
        "submit-customer-id ready"
    );

    run(service_fn(|event: Request| handler(&publisher, event))).await
}
