//! Customer IDs Put Lambda
//!
//! Handles PUT /customers/{id} (id also accepted as header)

use aws_sdk_dynamodb::Client;
use customer_ids_core::{handlers, logging, Config, DynamoRepository};
use lambda_http::{run, service_fn, Body, Error as LambdaError, Request, Response};
use tracing::info;

async fn handler(repo: &DynamoRepository, event: Request) -> Result<Response<Body>, LambdaError> {
    handlers::put_customer_id(repo, &event).await.into_response()
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();
    logging::init(&config);

    let sdk_config = config.sdk_config().await;
    let repo = DynamoRepository::new(Client::new(&sdk_config), &config);
    info!(table = %repo.table_name(), "put-customer-id ready");

    run(service_fn(|event: Request| handler(&repo, event))).await
}
