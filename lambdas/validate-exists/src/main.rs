//! Customer IDs Validate-Exists Lambda
//!
//! Workflow step: reports whether the id in the event is stored.
//! Errors are returned to the orchestrator as invocation failures.

use aws_sdk_dynamodb::Client;
use customer_ids_core::{logging, workflow, Config, DynamoRepository, ExistsOutcome};
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::error;

async fn handler(
    repo: &DynamoRepository,
    event: LambdaEvent<Value>,
) -> Result<ExistsOutcome, LambdaError> {
    let (payload, _context) = event.into_parts();

    workflow::validate_exists(repo, &payload).await.map_err(|e| {
        error!(error = %e, code = e.code(), "validate_exists failed");
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
