//! Application removal across a WorkSpaces directory
//!
//! The task is strictly sequential: list every WorkSpace in the directory,
//! then for each one look up its application associations and, where the
//! target application is associated, disassociate it and force a redeploy
//! so the WorkSpace uninstalls it.
//!
//! Failures never abort the run. A listing failure keeps whatever pages were
//! already fetched; a per-WorkSpace failure is logged and counted.

use crate::aws::error::{WorkspacesError, classify_anyhow_error};
use crate::aws::workspaces::{WorkspaceSummary, WorkspacesOperations};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};
use wsa_removal_common::RemovalReport;
use wsa_removal_common::config::RemovalConfig;
use wsa_removal_common::defaults::DEFAULT_PAGE_SIZE;

/// Execution options for a removal run
#[derive(Debug, Clone)]
pub struct RemovalOptions {
    /// WorkSpaces requested per DescribeWorkspaces page
    pub page_size: i32,
    /// Count matches without issuing mutation calls
    pub dry_run: bool,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            dry_run: false,
        }
    }
}

/// Result of listing a directory
#[derive(Debug)]
pub enum ListOutcome {
    /// Every page was fetched
    Complete(Vec<WorkspaceSummary>),
    /// A page failed; `workspaces` holds everything fetched before it
    Partial {
        workspaces: Vec<WorkspaceSummary>,
        error: WorkspacesError,
    },
}

impl ListOutcome {
    pub fn workspaces(&self) -> &[WorkspaceSummary] {
        match self {
            ListOutcome::Complete(workspaces) | ListOutcome::Partial { workspaces, .. } => {
                workspaces
            }
        }
    }

    pub fn into_workspaces(self) -> Vec<WorkspaceSummary> {
        match self {
            ListOutcome::Complete(workspaces) | ListOutcome::Partial { workspaces, .. } => {
                workspaces
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ListOutcome::Complete(_))
    }
}

/// List every WorkSpace in a directory, following pagination tokens.
///
/// Pages are concatenated in the order the API returns them. A token the
/// service already handed out ends the listing as `Partial`.
pub async fn collect_workspaces<O: WorkspacesOperations>(
    ops: &O,
    directory_id: &str,
    page_size: i32,
) -> ListOutcome {
    let mut workspaces = Vec::new();
    let mut next_token: Option<String> = None;
    let mut seen_tokens = HashSet::new();
    let mut pages = 0usize;

    loop {
        match ops
            .describe_workspaces_page(directory_id, page_size, next_token.take())
            .await
        {
            Ok(page) => {
                pages += 1;
                workspaces.extend(page.workspaces);
                match page.next_token {
                    Some(token) if !seen_tokens.insert(token.clone()) => {
                        error!(
                            directory_id = %directory_id,
                            token = %token,
                            collected = workspaces.len(),
                            "WorkSpaces listing returned a repeated pagination token"
                        );
                        let error = WorkspacesError::Sdk {
                            code: None,
                            message: "repeated pagination token".to_string(),
                        };
                        return ListOutcome::Partial { workspaces, error };
                    }
                    Some(token) => next_token = Some(token),
                    None => break,
                }
            }
            Err(e) => {
                let error = classify_anyhow_error(&e);
                if error.is_connectivity() {
                    warn!(
                        directory_id = %directory_id,
                        collected = workspaces.len(),
                        error = %error,
                        "Could not connect to WorkSpaces API endpoint"
                    );
                } else {
                    error!(
                        directory_id = %directory_id,
                        collected = workspaces.len(),
                        error = ?e,
                        "Failed to get WorkSpaces list"
                    );
                }
                return ListOutcome::Partial { workspaces, error };
            }
        }
    }

    info!(
        directory_id = %directory_id,
        count = workspaces.len(),
        pages,
        "Found WorkSpaces in directory"
    );
    ListOutcome::Complete(workspaces)
}

/// Removes one application from every WorkSpace in a directory
pub struct RemovalTask<'a, O> {
    ops: &'a O,
    config: RemovalConfig,
    options: RemovalOptions,
}

impl<'a, O: WorkspacesOperations> RemovalTask<'a, O> {
    pub fn new(ops: &'a O, config: RemovalConfig, options: RemovalOptions) -> Self {
        Self {
            ops,
            config,
            options,
        }
    }

    /// Run the removal and return its counters
    pub async fn run(&self) -> RemovalReport {
        let directory_id = self.config.directory_id.as_str();
        let app_id = self.config.target_app_id.as_str();

        if self.config.uses_placeholder() {
            warn!(
                directory_id = %directory_id,
                application_id = %app_id,
                "Configuration still uses placeholder values; \
                 set WorkspacesDirectory and OfficeAppId"
            );
        }

        info!(
            directory_id = %directory_id,
            application_id = %app_id,
            directory_source = %self.config.directory_source,
            app_source = %self.config.app_source,
            dry_run = self.options.dry_run,
            "Searching directory for WorkSpaces with application installed"
        );

        let outcome = collect_workspaces(self.ops, directory_id, self.options.page_size).await;
        let mut report = RemovalReport {
            workspaces_found: outcome.workspaces().len(),
            listing_complete: outcome.is_complete(),
            ..Default::default()
        };

        let workspaces = outcome.into_workspaces();
        if workspaces.is_empty() {
            info!(directory_id = %directory_id, "No WorkSpaces instances found in directory");
            return report;
        }

        for workspace in &workspaces {
            self.process_workspace(workspace, &mut report).await;
        }

        info!(
            application_id = %app_id,
            matches = report.matches,
            disassociated = report.disassociated,
            redeployed = report.redeployed,
            failed = report.failed,
            skipped = report.skipped,
            "Initiated application uninstall on {} WorkSpaces",
            report.matches
        );

        report
    }

    async fn process_workspace(&self, workspace: &WorkspaceSummary, report: &mut RemovalReport) {
        let workspace_id = workspace.workspace_id.as_str();
        let app_id = self.config.target_app_id.as_str();

        let associations = match self.ops.describe_application_associations(workspace_id).await {
            Ok(associations) => associations,
            Err(e) => {
                error!(
                    workspace_id = %workspace_id,
                    error = ?e,
                    "Failed to describe application associations"
                );
                report.failed += 1;
                return;
            }
        };
        report.workspaces_scanned += 1;

        if associations.is_empty() {
            debug!(workspace_id = %workspace_id, "No application associations");
            return;
        }

        for association in associations.iter().filter(|a| a.is_for(app_id)) {
            report.matches += 1;
            info!(
                workspace_id = %workspace_id,
                directory_id = ?workspace.directory_id,
                workspace_state = ?workspace.state,
                user_name = ?workspace.user_name,
                association_type = ?association.associated_resource_type,
                association_state = ?association.state,
                "Found matching application association"
            );

            if self.options.dry_run {
                info!(workspace_id = %workspace_id, "[DRY RUN] Would remove application");
                report.skipped += 1;
                continue;
            }

            self.remove_application(workspace_id, report).await;
        }
    }

    async fn remove_application(&self, workspace_id: &str, report: &mut RemovalReport) {
        let app_id = self.config.target_app_id.as_str();

        info!(workspace_id = %workspace_id, "Removing application association");
        if let Err(e) = self.ops.disassociate_application(workspace_id, app_id).await {
            error!(
                workspace_id = %workspace_id,
                error = ?e,
                "Failed to remove application"
            );
            report.failed += 1;
            return;
        }
        report.disassociated += 1;

        info!(workspace_id = %workspace_id, "Initiating application uninstallation");
        match self.ops.deploy_applications(workspace_id, true).await {
            Ok(()) => report.redeployed += 1,
            Err(e) => {
                error!(
                    workspace_id = %workspace_id,
                    error = ?e,
                    "Failed to start application uninstallation"
                );
                report.failed += 1;
            }
        }
    }
}
