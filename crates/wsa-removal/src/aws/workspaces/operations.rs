//! WorkSpaces operations trait for testing

use super::WorkspacesClient;
use super::types::{ApplicationAssociation, ApplicationSummary, WorkspacePage};
use anyhow::Result;

/// Trait for WorkSpaces operations that can be mocked in tests.
///
/// This trait abstracts the WorkSpaces client to enable unit testing of the
/// removal logic without hitting real AWS.
///
/// Note: Optional parameters use `Option<String>` instead of `Option<&str>` to
/// work around mockall lifetime limitations.
#[allow(async_fn_in_trait)] // Internal use only, Send+Sync bounds on trait are sufficient
#[cfg_attr(test, mockall::automock)]
pub trait WorkspacesOperations: Send + Sync {
    /// Fetch one page of WorkSpaces in a directory
    async fn describe_workspaces_page(
        &self,
        directory_id: &str,
        page_size: i32,
        next_token: Option<String>,
    ) -> Result<WorkspacePage>;

    /// Describe the APPLICATION associations of a WorkSpace
    async fn describe_application_associations(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<ApplicationAssociation>>;

    /// Remove an application association from a WorkSpace
    async fn disassociate_application(
        &self,
        workspace_id: &str,
        application_id: &str,
    ) -> Result<()>;

    /// Deploy applications on a WorkSpace, uninstalling removed ones
    async fn deploy_applications(&self, workspace_id: &str, force: bool) -> Result<()>;

    /// List applications available for association
    async fn describe_applications(&self, owner: Option<String>) -> Result<Vec<ApplicationSummary>>;
}

impl WorkspacesOperations for WorkspacesClient {
    async fn describe_workspaces_page(
        &self,
        directory_id: &str,
        page_size: i32,
        next_token: Option<String>,
    ) -> Result<WorkspacePage> {
        WorkspacesClient::describe_workspaces_page(self, directory_id, page_size, next_token).await
    }

    async fn describe_application_associations(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<ApplicationAssociation>> {
        WorkspacesClient::describe_application_associations(self, workspace_id).await
    }

    async fn disassociate_application(
        &self,
        workspace_id: &str,
        application_id: &str,
    ) -> Result<()> {
        WorkspacesClient::disassociate_application(self, workspace_id, application_id).await
    }

    async fn deploy_applications(&self, workspace_id: &str, force: bool) -> Result<()> {
        WorkspacesClient::deploy_applications(self, workspace_id, force).await
    }

    async fn describe_applications(
        &self,
        owner: Option<String>,
    ) -> Result<Vec<ApplicationSummary>> {
        WorkspacesClient::describe_applications(self, owner).await
    }
}
