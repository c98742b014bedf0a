//! wsa-removal-lambda: Lambda entry point
//!
//! Loads the AWS configuration once per execution environment and serves
//! invocations with the removal handler.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;
use wsa_removal::aws::{AwsContext, AwsSettings, FromAwsContext, WorkspacesClient};
use wsa_removal::{handler, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_lambda();

    let settings = AwsSettings::from_env();
    let aws = AwsContext::load(&settings).await;
    info!(
        region = ?aws.region(),
        max_attempts = settings.max_attempts,
        "WorkSpaces client configured"
    );

    let client = WorkspacesClient::from_context(&aws);
    let client = &client;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::function_handler(client, event).await
    }))
    .await
}
