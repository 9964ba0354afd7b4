//! Customer IDs Log-Event Lambda
//!
//! Workflow step: writes one structured log record with the customer id and
//! the outcomes of the earlier steps.

use customer_ids_core::{logging, workflow, Config, LogOutcome};
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde_json::Value;

async fn handler(event: LambdaEvent<Value>) -> Result<LogOutcome, LambdaError> {
    let (payload, context) = event.into_parts();
    Ok(workflow::log_event(&payload, Some(&context.request_id)))
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();
    logging::init(&config);

    run(service_fn(handler)).await
}
