//! AWS client modules
//!
//! This module provides wrappers around the AWS SDK for:
//! - context: Shared SDK configuration (region, profile, retry policy)
//! - error: Classification of WorkSpaces API failures
//! - workspaces: WorkSpaces directory, association and deployment calls

pub mod context;
pub mod error;
pub mod workspaces;

pub use context::{AwsContext, AwsSettings, FromAwsContext};
pub use error::{WorkspacesError, classify_anyhow_error, classify_aws_error, classify_sdk_error};
pub use workspaces::{
    ApplicationAssociation, ApplicationSummary, WorkspacePage, WorkspaceSummary, WorkspacesClient,
    WorkspacesOperations,
};
