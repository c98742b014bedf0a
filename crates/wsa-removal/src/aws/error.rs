//! WorkSpaces error classification and handling
//!
//! Provides typed errors for WorkSpaces SDK operations using the `.code()`
//! method instead of string matching on Debug format.

use aws_sdk_workspaces::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// WorkSpaces error categories for logging and reporting
#[derive(Debug, Clone, Error)]
pub enum WorkspacesError {
    /// The API endpoint could not be reached (DNS, connect, timeout)
    #[error("Could not connect to WorkSpaces API endpoint: {message}")]
    Connectivity { message: String },

    /// Directory, WorkSpace or application does not exist
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Rate limit exceeded after the SDK exhausted its retries
    #[error("Rate limit exceeded")]
    Throttled,

    /// Caller lacks permission for the operation
    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    /// WorkSpace is in a state that does not accept the operation
    /// (e.g. stopped, or a deployment already in progress)
    #[error("Invalid resource state: {message}")]
    InvalidResourceState { message: String },

    /// Generic AWS SDK error with code and message
    #[error("AWS error: {message}")]
    Sdk {
        code: Option<String>,
        message: String,
    },
}

impl WorkspacesError {
    /// Check if the endpoint was unreachable
    pub fn is_connectivity(&self) -> bool {
        matches!(self, WorkspacesError::Connectivity { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkspacesError::NotFound { .. })
    }

    /// Check if a later invocation could succeed without configuration changes
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WorkspacesError::Connectivity { .. }
                | WorkspacesError::Throttled
                | WorkspacesError::InvalidResourceState { .. }
        )
    }

    /// Get a user-friendly suggestion for resolving this error, if available.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            WorkspacesError::Sdk { code: Some(c), .. } => suggestion_for_code(c),
            WorkspacesError::AccessDenied { .. } => suggestion_for_code("AccessDeniedException"),
            WorkspacesError::Connectivity { .. } => Some(
                "Check network access to the WorkSpaces endpoint for this region.".to_string(),
            ),
            _ => None,
        }
    }
}

/// Known error codes for "not found" conditions
const NOT_FOUND_CODES: &[&str] = &["ResourceNotFoundException"];

/// Known error codes for throttling/rate limiting
const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "RequestLimitExceeded",
    "TooManyRequestsException",
];

/// Known error codes for missing permissions
const ACCESS_DENIED_CODES: &[&str] = &["AccessDeniedException", "UnauthorizedOperation"];

/// Known error codes for WorkSpaces that cannot accept the change right now
const INVALID_STATE_CODES: &[&str] = &[
    "InvalidResourceStateException",
    "ResourceInUseException",
    "OperationInProgressException",
];

/// Classify a WorkSpaces service error using the error code.
pub fn classify_aws_error(code: Option<&str>, message: Option<&str>) -> WorkspacesError {
    let message = message.unwrap_or("Unknown error").to_string();

    match code {
        Some(c) if NOT_FOUND_CODES.contains(&c) => WorkspacesError::NotFound { message },
        Some(c) if THROTTLING_CODES.contains(&c) => WorkspacesError::Throttled,
        Some(c) if ACCESS_DENIED_CODES.contains(&c) => WorkspacesError::AccessDenied { message },
        Some(c) if INVALID_STATE_CODES.contains(&c) => {
            WorkspacesError::InvalidResourceState { message }
        }
        _ => WorkspacesError::Sdk {
            code: code.map(|s| s.to_string()),
            message,
        },
    }
}

/// Classify any WorkSpaces operation error.
///
/// Dispatch failures and timeouts never reached the service and are reported
/// as connectivity problems; everything else is classified by its code.
pub fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> WorkspacesError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => WorkspacesError::Connectivity {
            message: DisplayErrorContext(err).to_string(),
        },
        _ => match err.code() {
            Some(_) => classify_aws_error(err.code(), err.message()),
            None => WorkspacesError::Sdk {
                code: None,
                message: DisplayErrorContext(err).to_string(),
            },
        },
    }
}

/// Classify an error from an anyhow::Error by finding a `WorkspacesError`
/// in its chain.
pub fn classify_anyhow_error(error: &anyhow::Error) -> WorkspacesError {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<WorkspacesError>())
        .cloned()
        .unwrap_or_else(|| WorkspacesError::Sdk {
            code: None,
            message: format!("{error:#}"),
        })
}

/// Error code to user-friendly suggestion mapping
const SUGGESTIONS: &[(&str, &str)] = &[
    (
        "InvalidParameterValuesException",
        "Check WorkspacesDirectory and OfficeAppId; the UPDATE_* placeholders must be replaced.",
    ),
    (
        "AccessDeniedException",
        "Grant workspaces:DescribeWorkspaces, DescribeWorkspaceAssociations, \
         DisassociateWorkspaceApplication and DeployWorkspaceApplications.",
    ),
    (
        "OperationNotSupportedException",
        "Application management requires WorkSpaces with BYOL or \
         Amazon-provided application support.",
    ),
    (
        "ThrottlingException",
        "WorkSpaces API rate limit hit. Raise WSA_MAX_ATTEMPTS or invoke less often.",
    ),
];

/// Get a user-friendly suggestion for a known error code.
fn suggestion_for_code(code: &str) -> Option<String> {
    SUGGESTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| (*s).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn not_found_codes() {
        for code in NOT_FOUND_CODES {
            let err = classify_aws_error(Some(code), Some("no such workspace"));
            assert!(err.is_not_found(), "Expected NotFound for code: {code}");
        }
    }

    #[test]
    fn throttling_codes() {
        for code in THROTTLING_CODES {
            let err = classify_aws_error(Some(code), Some("msg"));
            assert!(err.is_retryable(), "Expected retryable for code: {code}");
            assert!(matches!(err, WorkspacesError::Throttled));
        }
    }

    #[test]
    fn access_denied_codes() {
        for code in ACCESS_DENIED_CODES {
            let err = classify_aws_error(Some(code), Some("msg"));
            assert!(matches!(err, WorkspacesError::AccessDenied { .. }));
            assert!(!err.is_retryable());
            assert!(err.suggestion().is_some());
        }
    }

    #[test]
    fn invalid_state_codes() {
        for code in INVALID_STATE_CODES {
            let err = classify_aws_error(Some(code), Some("WorkSpace is stopped"));
            assert!(matches!(err, WorkspacesError::InvalidResourceState { .. }));
            assert!(err.is_retryable());
        }
    }

    #[test]
    fn unknown_and_missing_codes() {
        let err = classify_aws_error(Some("SomeNewError"), Some("details"));
        assert!(matches!(err, WorkspacesError::Sdk { .. }));

        let err2 = classify_aws_error(None, None);
        match err2 {
            WorkspacesError::Sdk { code, message } => {
                assert!(code.is_none());
                assert_eq!(message, "Unknown error");
            }
            other => panic!("expected Sdk error, got {other:?}"),
        }
    }

    #[test]
    fn anyhow_chain_finds_typed_error() {
        let result: Result<(), WorkspacesError> = Err(WorkspacesError::Connectivity {
            message: "dns error".to_string(),
        });
        let err = result.context("Failed to describe workspaces").unwrap_err();

        let classified = classify_anyhow_error(&err);
        assert!(classified.is_connectivity());
    }

    #[test]
    fn anyhow_chain_without_typed_error() {
        let err = anyhow::anyhow!("connection refused");
        let classified = classify_anyhow_error(&err);
        assert!(matches!(classified, WorkspacesError::Sdk { code: None, .. }));
        assert!(!classified.is_connectivity());
    }

    #[test]
    fn suggestions_for_known_codes() {
        for (code, _) in SUGGESTIONS {
            assert!(
                suggestion_for_code(code).is_some(),
                "No suggestion for code: {code}"
            );
        }
        assert!(suggestion_for_code("SomeUnknownCode").is_none());

        let err = classify_aws_error(Some("InvalidParameterValuesException"), Some("bad id"));
        assert!(err.suggestion().unwrap().contains("placeholders"));
    }
}
