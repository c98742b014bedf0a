//! Shared AWS configuration context
//!
//! Provides `AwsContext` for loading AWS SDK configuration once and
//! creating service clients from the same config.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::sync::Arc;
use wsa_removal_common::defaults::{DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPTS_ENV, max_attempts_from};

/// Settings applied when loading the SDK configuration.
///
/// `None` fields defer to the SDK default chain (`AWS_REGION`, `AWS_PROFILE`,
/// config files, instance metadata).
#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Attempts per call, initial call included, in standard retry mode
    pub max_attempts: u32,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AwsSettings {
    /// Settings for the Lambda environment: region and credentials come from
    /// the function's execution environment, the retry bound from `WSA_MAX_ATTEMPTS`.
    pub fn from_env() -> Self {
        Self {
            max_attempts: max_attempts_from(std::env::var(MAX_ATTEMPTS_ENV).ok().as_deref()),
            ..Default::default()
        }
    }
}

/// Shared AWS configuration context for creating service clients.
///
/// # Example
/// ```ignore
/// let aws = AwsContext::load(&AwsSettings::from_env()).await;
/// let workspaces = WorkspacesClient::from_context(&aws);
/// ```
#[derive(Clone)]
pub struct AwsContext {
    config: Arc<SdkConfig>,
}

impl AwsContext {
    /// Load AWS configuration with standard-mode retries.
    ///
    /// Transient failures (throttling, 5xx, dropped connections) are retried
    /// by the SDK with exponential backoff up to `max_attempts`.
    pub async fn load(settings: &AwsSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(settings.max_attempts));

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }

        Self {
            config: Arc::new(loader.load().await),
        }
    }

    /// Get the underlying SDK config for direct client construction.
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    /// Resolved region, if any
    pub fn region(&self) -> Option<String> {
        self.config.region().map(|r| r.to_string())
    }

    /// Create a WorkSpaces client from this context.
    pub fn workspaces_client(&self) -> aws_sdk_workspaces::Client {
        aws_sdk_workspaces::Client::new(self.sdk_config())
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("region", &self.region())
            .finish_non_exhaustive()
    }
}

/// Types that can be built from a loaded [`AwsContext`]
pub trait FromAwsContext {
    fn from_context(ctx: &AwsContext) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AwsSettings::default();
        assert!(settings.region.is_none());
        assert!(settings.profile.is_none());
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_context_applies_region_and_retry() {
        let settings = AwsSettings {
            region: Some("eu-west-1".to_string()),
            profile: None,
            max_attempts: 4,
        };
        let ctx = AwsContext::load(&settings).await;

        assert_eq!(ctx.region().as_deref(), Some("eu-west-1"));
        let retry = ctx.sdk_config().retry_config().expect("retry config set");
        assert_eq!(retry.max_attempts(), 4);
    }

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn test_context_clone() {
        let ctx1 = AwsContext::load(&AwsSettings::from_env()).await;
        let ctx2 = ctx1.clone();
        assert_eq!(ctx1.region(), ctx2.region());
    }
}
