//! WorkSpaces types

use aws_sdk_workspaces::types::{WorkSpaceApplication, Workspace, WorkspaceResourceAssociation};

/// A WorkSpace returned by the directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSummary {
    pub workspace_id: String,
    pub directory_id: Option<String>,
    pub user_name: Option<String>,
    /// WorkSpace state (e.g. "AVAILABLE", "STOPPED")
    pub state: Option<String>,
}

impl WorkspaceSummary {
    /// Summary with only an id, as used by tests and dry runs
    pub fn with_id(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            directory_id: None,
            user_name: None,
            state: None,
        }
    }

    /// Convert an SDK record; records without an id are unusable and dropped.
    pub(crate) fn from_sdk(workspace: &Workspace) -> Option<Self> {
        Some(Self {
            workspace_id: workspace.workspace_id()?.to_string(),
            directory_id: workspace.directory_id().map(str::to_string),
            user_name: workspace.user_name().map(str::to_string),
            state: workspace.state().map(|s| s.as_str().to_string()),
        })
    }
}

/// One page of a DescribeWorkspaces listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspacePage {
    pub workspaces: Vec<WorkspaceSummary>,
    /// Token for the next page; `None` on the last page
    pub next_token: Option<String>,
}

/// An application associated with a WorkSpace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationAssociation {
    /// Application id (e.g. "wsa-hvh179sq6")
    pub associated_resource_id: String,
    /// Association type (always "APPLICATION" for filtered lookups)
    pub associated_resource_type: Option<String>,
    /// Association state (e.g. "COMPLETED", "PENDING_INSTALL")
    pub state: Option<String>,
}

impl ApplicationAssociation {
    pub fn new(associated_resource_id: impl Into<String>) -> Self {
        Self {
            associated_resource_id: associated_resource_id.into(),
            associated_resource_type: Some("APPLICATION".to_string()),
            state: None,
        }
    }

    pub(crate) fn from_sdk(association: &WorkspaceResourceAssociation) -> Option<Self> {
        Some(Self {
            associated_resource_id: association.associated_resource_id()?.to_string(),
            associated_resource_type: association
                .associated_resource_type()
                .map(|t| t.as_str().to_string()),
            state: association.state().map(|s| s.as_str().to_string()),
        })
    }

    /// True if this association refers to `application_id`
    pub fn is_for(&self, application_id: &str) -> bool {
        self.associated_resource_id == application_id
    }
}

/// An application that can be associated with WorkSpaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub application_id: String,
    pub name: Option<String>,
    pub owner: Option<String>,
    pub state: Option<String>,
}

impl ApplicationSummary {
    pub(crate) fn from_sdk(application: &WorkSpaceApplication) -> Option<Self> {
        Some(Self {
            application_id: application.application_id()?.to_string(),
            name: application.name().map(str::to_string),
            owner: application.owner().map(str::to_string),
            state: application.state().map(|s| s.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_from_sdk() {
        let sdk = Workspace::builder()
            .workspace_id("ws-abc123")
            .directory_id("d-123")
            .user_name("alice")
            .build();
        let summary = WorkspaceSummary::from_sdk(&sdk).unwrap();
        assert_eq!(summary.workspace_id, "ws-abc123");
        assert_eq!(summary.directory_id.as_deref(), Some("d-123"));
        assert_eq!(summary.user_name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_workspace_without_id_is_dropped() {
        let sdk = Workspace::builder().directory_id("d-123").build();
        assert!(WorkspaceSummary::from_sdk(&sdk).is_none());
    }

    #[test]
    fn test_association_matching() {
        let association = ApplicationAssociation::new("wsa-hvh179sq6");
        assert!(association.is_for("wsa-hvh179sq6"));
        assert!(!association.is_for("wsa-khw7gclz4"));
    }
}
