//! Shared utilities for AWS integration tests
//!
//! Provides region and directory detection.

use wsa_removal::aws::AwsSettings;

/// Get the AWS region for tests.
///
/// Checks environment variables in order:
/// 1. AWS_REGION
/// 2. AWS_DEFAULT_REGION
/// 3. Falls back to us-east-1
pub fn get_test_region() -> String {
    std::env::var("AWS_REGION")
        .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|_| "us-east-1".to_string())
}

/// Settings for test clients in the test region
pub fn test_settings() -> AwsSettings {
    AwsSettings {
        region: Some(get_test_region()),
        ..Default::default()
    }
}

/// Directory to scan in read-only tests, from `WSA_TEST_DIRECTORY`
pub fn test_directory() -> Option<String> {
    std::env::var("WSA_TEST_DIRECTORY").ok()
}
