//! Customer IDs Get Lambda
//!
//! Handles GET /customers/{id} (id also accepted as header or query parameter)

use aws_sdk_dynamodb::Client;
use customer_ids_core::{handlers, logging, Config, DynamoRepository};
use lambda_http::{run, service_fn, Body, Error as LambdaError, Request, Response};
use tracing::info;

async fn handler(repo: &DynamoRepository, event: Request) -> Result<Response<Body>, LambdaError> {
    handlers::get_customer_id(repo, &event).await.into_response()
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();
    logging::init(&config);

    // Built once per process, reused across invocations
    let sdk_config = config.sdk_config().await;
    let repo = DynamoRepository::new(Client::new(&sdk_config), &config);
    info!(table = %repo.table_name(), "get-customer-id ready");

    run(service_fn(|event: Request| handler(&repo, event))).await
}
