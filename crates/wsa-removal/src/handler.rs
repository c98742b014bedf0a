//! Lambda invocation handler
//!
//! Always answers 200: per-WorkSpace failures and unusable payload fields
//! only show up in the logs.

use crate::aws::workspaces::WorkspacesOperations;
use crate::removal::{RemovalOptions, RemovalTask};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};
use wsa_removal_common::{HandlerResponse, RemovalConfig, RemovalEvent};

/// Handle one invocation using the process environment for fallbacks
pub async fn function_handler<O: WorkspacesOperations>(
    ops: &O,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    handle_with_env(ops, event, |key| std::env::var(key).ok()).await
}

/// Handle one invocation with an explicit environment lookup
pub async fn handle_with_env<O, F>(
    ops: &O,
    event: LambdaEvent<Value>,
    env_lookup: F,
) -> Result<HandlerResponse, Error>
where
    O: WorkspacesOperations,
    F: Fn(&str) -> Option<String>,
{
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Processing invocation");

    let (event, issues) = RemovalEvent::from_value(payload);
    for issue in &issues {
        warn!(error = %issue, "Ignoring invocation payload value");
    }
    let config = RemovalConfig::resolve(&event, env_lookup);

    let report = RemovalTask::new(ops, config, RemovalOptions::default())
        .run()
        .await;

    Ok(HandlerResponse::ok(report.message()))
}
