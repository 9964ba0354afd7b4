//! Customer IDs Insert Lambda
//!
//! Workflow step: conditionally stores the event's top-level `id` with a
//! `created_at` timestamp. Returns `{"inserted": false}` when the id already
//! exists.

use aws_sdk_dynamodb::Client;
use customer_ids_core::{logging, workflow, Config, DynamoRepository, InsertOutcome};
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::error;

async fn handler(
    repo: &DynamoRepository,
    event: LambdaEvent<Value>,
) -> Result<InsertOutcome, LambdaError> {
    let (payload, context) = event.into_parts();

    workflow::insert_id(repo, &payload).await.map_err(|e| {
        error!(error = %e, request_id = %context.request_id, "insert failed");
        LambdaError::from(e)
    })
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();
    logging::init(&config);

    let sdk_config = config.sdk_config().await;
    let repo = DynamoRepository::new(Client::new(&sdk_config), &config);

    run(service_fn(|event: LambdaEvent<Value>| handler(&repo, event))).await
}
