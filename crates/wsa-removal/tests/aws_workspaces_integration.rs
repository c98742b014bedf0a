//! WorkSpaces integration tests - actually call AWS APIs
//!
//! All tests are read-only. They are marked `#[ignore]` and only run with:
//! ```
//! AWS_PROFILE=your_profile WSA_TEST_DIRECTORY=d-xxxxxxxxxx \
//!     cargo test --test aws_workspaces_integration -- --ignored
//! ```

mod aws_test_helpers;

use aws_test_helpers::*;
use wsa_removal::aws::{WorkspacesClient, classify_anyhow_error};
use wsa_removal::removal::{RemovalOptions, RemovalTask, collect_workspaces};
use wsa_removal_common::defaults::{DEFAULT_APPLICATION_OWNER, DEFAULT_PAGE_SIZE};
use wsa_removal_common::{RemovalConfig, RemovalEvent};

/// Amazon-provided applications are visible in every account
#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn test_list_amazon_applications() {
    let client = WorkspacesClient::new(&test_settings())
        .await
        .expect("AWS credentials required - set AWS_PROFILE or AWS_ACCESS_KEY_ID");

    let applications = client
        .describe_applications(Some(DEFAULT_APPLICATION_OWNER.to_string()))
        .await
        .expect("Should list applications");

    assert!(
        applications.iter().all(|a| a.application_id.starts_with("wsa-")),
        "Application ids should start with 'wsa-'"
    );
}

/// The placeholder directory id is rejected by the service, not by connectivity
#[tokio::test]
#[ignore = "requires AWS credentials"]
async fn test_placeholder_directory_is_rejected() {
    let client = WorkspacesClient::new(&test_settings())
        .await
        .expect("AWS credentials required");

    let err = client
        .describe_workspaces_page("UPDATE_DIRECTORYID", DEFAULT_PAGE_SIZE, None)
        .await
        .expect_err("Placeholder directory id should be rejected");

    assert!(!classify_anyhow_error(&err).is_connectivity());
}

/// Listing and a dry run against a real directory
#[tokio::test]
#[ignore = "requires AWS credentials and WSA_TEST_DIRECTORY"]
async fn test_dry_run_against_directory() {
    let Some(directory) = test_directory() else {
        eprintln!("WSA_TEST_DIRECTORY not set, skipping");
        return;
    };
    let client = WorkspacesClient::new(&test_settings())
        .await
        .expect("AWS credentials required");

    let outcome = collect_workspaces(&client, &directory, DEFAULT_PAGE_SIZE).await;
    assert!(outcome.is_complete(), "Listing should not fail: {outcome:?}");

    let event = RemovalEvent {
        workspaces_directory: Some(directory),
        office_app_id: Some("wsa-hvh179sq6".to_string()),
    };
    let options = RemovalOptions {
        dry_run: true,
        ..Default::default()
    };
    let report = RemovalTask::new(&client, RemovalConfig::resolve(&event, |_| None), options)
        .run()
        .await;

    assert_eq!(report.workspaces_found, outcome.workspaces().len());
    assert_eq!(report.disassociated, 0);
    assert_eq!(report.matches, report.skipped);
}
