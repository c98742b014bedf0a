//! wsa-removal-common - Shared types for WorkSpaces application removal
//!
//! This crate holds everything about an invocation that does not need the
//! AWS SDK: payload parsing, configuration resolution, the response payload
//! and the run report.
//!
//! ## Modules
//!
//! - [`config`]: Payload and environment configuration resolution
//! - [`defaults`]: Default configuration values and fixed messages
//! - [`error`]: Configuration errors
//! - [`report`]: Per-invocation counters
//! - [`response`]: Status payload returned to the Lambda platform

pub mod config;
pub mod defaults;
pub mod error;
pub mod report;
pub mod response;

// Re-export commonly used types
pub use config::{ApplicationId, ConfigSource, DirectoryId, RemovalConfig, RemovalEvent};
pub use error::ConfigError;
pub use report::RemovalReport;
pub use response::HandlerResponse;
