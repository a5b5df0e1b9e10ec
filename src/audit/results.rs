//! Audit result types
//!
//! Defines the action tags written to the audit log and the outcome of a write.

use std::fmt;
use std::path::PathBuf;

/// Literal tags written at the end of each audit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    AddMountPoint,
    StartMount,
    RemoveMountPoint,
    StopMount,
    StopMountLevel,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::AddMountPoint => "Add Mount Point",
            AuditAction::StartMount => "Start Mount",
            AuditAction::RemoveMountPoint => "Remove Mount Point",
            AuditAction::StopMount => "Stop Mount",
            AuditAction::StopMountLevel => "Stop Mount Level",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one audit write. Nothing here is ever surfaced as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditStatus {
    /// Line appended to the user's existing log, now renamed to this path.
    Appended(PathBuf),
    /// New log file created at this path.
    Created(PathBuf),
    /// No configured log root exists.
    SkippedNoLogRoot,
    /// The directory matches no audit-eligible prefix.
    SkippedNotEligible,
    /// Reading, writing or renaming the log failed.
    Failed,
}
