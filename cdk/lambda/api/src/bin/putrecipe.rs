//! Stores a recipe carried in the event's body.
//!
//! # Environment variables
//!
//! - `openbrew_dynamo_table`: name of the DynamoDB table that stores
//!   recipes.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

use openbrew_api::config::Config;
use openbrew_api::dynamodb::RecipeTable;
use openbrew_api::error::Error as ApiError;
use openbrew_api::handlers::handle_create;
use openbrew_api::response::Response;

async fn function_handler(
    table: &Result<RecipeTable, ApiError>,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    let response = match table {
        Ok(table) => handle_create(table, &event.payload).await,
        // keep serving; every request gets the not-configured envelope
        Err(error) => {
            tracing::error!("recipe table is not configured: {}", error);
            Response::from_error(error)
        },
    };
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let table = match Config::from_env() {
        Ok(config) => {
            let sdk_config = aws_config::load_from_env().await;
            Ok(RecipeTable::new(
                &config,
                aws_sdk_dynamodb::Client::new(&sdk_config),
            ))
        },
        Err(error) => Err(error),
    };

    lambda_runtime::run(service_fn(|event| function_handler(&table, event))).await
}
