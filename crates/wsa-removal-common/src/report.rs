//! Counters for one removal run
//!
//! The report is logged and printed by the CLI. It is never part of the
//! Lambda response.

use crate::defaults::{COMPLETED_MESSAGE, NO_WORKSPACES_MESSAGE};

/// Report of a removal run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    /// WorkSpaces returned by the directory listing
    pub workspaces_found: usize,
    /// WorkSpaces whose associations were described successfully
    pub workspaces_scanned: usize,
    /// Associations matching the target application
    pub matches: usize,
    pub disassociated: usize,
    pub redeployed: usize,
    pub failed: usize,
    /// Matches left untouched in dry-run mode
    pub skipped: usize,
    /// False if listing stopped early on an error
    pub listing_complete: bool,
}

impl RemovalReport {
    /// Message placed in the response body
    pub fn message(&self) -> &'static str {
        if self.workspaces_found == 0 {
            NO_WORKSPACES_MESSAGE
        } else {
            COMPLETED_MESSAGE
        }
    }
}
