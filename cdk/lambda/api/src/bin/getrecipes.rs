//! Returns the welcome payload.
//!
//! The inbound event is ignored entirely.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

use openbrew_api::handlers::handle_fetch;
use openbrew_api::response::Response;

async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    Ok(handle_fetch(&event.payload))
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

    lambda_runtime::run(service_fn(function_handler)).await
}
