//! WorkSpaces directory, association and deployment calls

mod operations;
mod types;

pub use operations::WorkspacesOperations;
pub use types::{ApplicationAssociation, ApplicationSummary, WorkspacePage, WorkspaceSummary};

#[cfg(test)]
pub use operations::MockWorkspacesOperations;

use crate::aws::context::{AwsContext, AwsSettings, FromAwsContext};
use crate::aws::error::classify_sdk_error;
use anyhow::{Context, Result};
use aws_sdk_workspaces::Client;
use aws_sdk_workspaces::types::WorkSpaceAssociatedResourceType;
use tracing::{debug, warn};

/// Page size for DescribeApplications
const APPLICATIONS_PAGE_SIZE: i32 = 50;

/// WorkSpaces client for application removal
pub struct WorkspacesClient {
    pub(crate) client: Client,
}

impl FromAwsContext for WorkspacesClient {
    fn from_context(ctx: &AwsContext) -> Self {
        Self {
            client: ctx.workspaces_client(),
        }
    }
}

impl WorkspacesClient {
    /// Create a new WorkSpaces client (loads AWS config from environment)
    pub async fn new(settings: &AwsSettings) -> Result<Self> {
        let ctx = AwsContext::load(settings).await;
        Ok(Self::from_context(&ctx))
    }

    /// Fetch one page of WorkSpaces in a directory
    pub async fn describe_workspaces_page(
        &self,
        directory_id: &str,
        page_size: i32,
        next_token: Option<String>,
    ) -> Result<WorkspacePage> {
        let response = self
            .client
            .describe_workspaces()
            .directory_id(directory_id)
            .limit(page_size)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))
            .with_context(|| format!("Failed to describe WorkSpaces in directory {directory_id}"))?;

        let workspaces = response
            .workspaces()
            .iter()
            .filter_map(|w| {
                let summary = WorkspaceSummary::from_sdk(w);
                if summary.is_none() {
                    warn!(directory_id = %directory_id, "Skipping WorkSpace record without an id");
                }
                summary
            })
            .collect::<Vec<_>>();

        debug!(
            directory_id = %directory_id,
            count = workspaces.len(),
            has_more = response.next_token().is_some(),
            "Fetched WorkSpaces page"
        );

        Ok(WorkspacePage {
            workspaces,
            next_token: response.next_token().map(str::to_string),
        })
    }

    /// Describe the application associations of a WorkSpace
    pub async fn describe_application_associations(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<ApplicationAssociation>> {
        let response = self
            .client
            .describe_workspace_associations()
            .workspace_id(workspace_id)
            .associated_resource_types(WorkSpaceAssociatedResourceType::Application)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))
            .with_context(|| format!("Failed to describe associations for {workspace_id}"))?;

        Ok(response
            .associations()
            .iter()
            .filter_map(ApplicationAssociation::from_sdk)
            .collect())
    }

    /// Remove an application association from a WorkSpace
    pub async fn disassociate_application(
        &self,
        workspace_id: &str,
        application_id: &str,
    ) -> Result<()> {
        self.client
            .disassociate_workspace_application()
            .workspace_id(workspace_id)
            .application_id(application_id)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))
            .with_context(|| {
                format!("Failed to disassociate {application_id} from {workspace_id}")
            })?;

        debug!(
            workspace_id = %workspace_id,
            application_id = %application_id,
            "Disassociated application"
        );
        Ok(())
    }

    /// Deploy the WorkSpace's current application set.
    ///
    /// With `force`, applications that are no longer associated are uninstalled
    /// even if a previous deployment left them in place.
    pub async fn deploy_applications(&self, workspace_id: &str, force: bool) -> Result<()> {
        let response = self
            .client
            .deploy_workspace_applications()
            .workspace_id(workspace_id)
            .force(force)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))
            .with_context(|| format!("Failed to deploy applications on {workspace_id}"))?;

        debug!(
            workspace_id = %workspace_id,
            deployment = ?response.deployment(),
            "Application deployment started"
        );
        Ok(())
    }

    /// List applications available for association, following pagination
    pub async fn describe_applications(
        &self,
        owner: Option<String>,
    ) -> Result<Vec<ApplicationSummary>> {
        let mut applications = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .describe_applications()
                .set_owner(owner.clone())
                .max_results(APPLICATIONS_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| classify_sdk_error(&e))
                .context("Failed to describe WorkSpaces applications")?;

            applications.extend(
                response
                    .applications()
                    .iter()
                    .filter_map(ApplicationSummary::from_sdk),
            );

            match response.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        debug!(count = applications.len(), owner = ?owner, "Listed applications");
        Ok(applications)
    }
}
