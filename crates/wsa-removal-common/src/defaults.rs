//! Default configuration values shared between the Lambda and the CLI
//!
//! The placeholder values are intentionally invalid identifiers: a deployment
//! that forgets to configure the function fails at the first API call rather
//! than touching an unintended directory.

/// Payload field and environment variable naming the WorkSpaces directory
pub const DIRECTORY_KEY: &str = "WorkspacesDirectory";

/// Payload field and environment variable naming the application to remove
pub const APP_ID_KEY: &str = "OfficeAppId";

/// Placeholder directory id used when nothing is configured
pub const PLACEHOLDER_DIRECTORY_ID: &str = "UPDATE_DIRECTORYID";

/// Placeholder application id used when nothing is configured
pub const PLACEHOLDER_APP_ID: &str = "UPDATE_APPID";

/// Number of WorkSpaces requested per DescribeWorkspaces page
pub const DEFAULT_PAGE_SIZE: i32 = 25;

/// Largest page size DescribeWorkspaces accepts
pub const MAX_PAGE_SIZE: i32 = 25;

/// Environment variable bounding SDK retry attempts
pub const MAX_ATTEMPTS_ENV: &str = "WSA_MAX_ATTEMPTS";

/// Default number of attempts (initial call included) for standard retry mode
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Owner filter for listing Amazon-provided applications
pub const DEFAULT_APPLICATION_OWNER: &str = "AMAZON";

/// Response message when the directory has no WorkSpaces
pub const NO_WORKSPACES_MESSAGE: &str = "No WorkSpaces found in directory!";

/// Response message after all WorkSpaces were processed
pub const COMPLETED_MESSAGE: &str = "Completed WorkSpaces Application Modifications!";

/// Parse the retry bound from an optional raw value, falling back to the default.
///
/// Zero and unparseable values fall back as well; the SDK rejects a zero bound.
pub fn max_attempts_from(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_ATTEMPTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_within_api_limit() {
        assert!(DEFAULT_PAGE_SIZE > 0 && DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    }

    #[test]
    fn max_attempts_parsing() {
        assert_eq!(max_attempts_from(None), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(max_attempts_from(Some("4")), 4);
        assert_eq!(max_attempts_from(Some(" 7 ")), 7);
        assert_eq!(max_attempts_from(Some("0")), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(max_attempts_from(Some("lots")), DEFAULT_MAX_ATTEMPTS);
    }
}
