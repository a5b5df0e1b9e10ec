//! Service result types
//!
//! Defines the reports returned by the service operations. Nothing the
//! service does is fatal; these values say how much of each operation
//! actually happened.

use crate::audit::AuditStatus;
use crate::host::ReadonlyStatus;
use crate::registry::{PersistStatus, UnmountStatus};
use crate::resolver::ResolutionPlan;

/// How the project's mounts are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountMethod {
    /// Mounts come from a per-level list handled by the editor UI.
    ByLevelConfig,
    /// Mounts come from the persisted directory records.
    ByDirectory,
}

/// Result of mounting one path.
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub path: String,
    pub is_new_add: bool,
    pub readonly: ReadonlyStatus,
    pub plan: ResolutionPlan,
    /// `None` when the mount was not persisted (replay, or nothing bound).
    pub persisted: Option<PersistStatus>,
    /// One entry per required sibling record, in plan order.
    pub required: Vec<PersistStatus>,
    pub audit: Vec<AuditStatus>,
}

/// Result of an unmount request.
#[derive(Debug, Clone)]
pub struct UnmountOutcome {
    pub status: UnmountStatus,
    /// `None` when nothing was removed.
    pub audit: Option<AuditStatus>,
}

/// Result of service startup.
#[derive(Debug, Clone)]
pub struct StartupReport {
    pub method: MountMethod,
    pub replayed: Vec<RegisterOutcome>,
}
