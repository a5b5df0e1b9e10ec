//! Resolver result types
//!
//! Defines the bindings and plans produced by `resolve`.

use crate::record::MountRecord;

/// One virtual path redirected to a real directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountBinding {
    pub virtual_path: String,
    pub real_path: String,
}

impl MountBinding {
    /// Builds a binding, forcing the virtual path to end with `/`.
    pub fn new(virtual_path: impl Into<String>, real_path: impl Into<String>) -> Self {
        let mut virtual_path = virtual_path.into();
        if !virtual_path.ends_with('/') {
            virtual_path.push('/');
        }
        Self {
            virtual_path,
            real_path: real_path.into(),
        }
    }
}

/// Which branch of the resolution produced a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanKind {
    /// A configured rule matched; carries its key.
    Rule { match_key: String },
    /// No rule matched and the path is a `Content` folder: its children were bound.
    ContentChildren,
    /// No rule matched: the folder was bound under its own name.
    SingleFolder,
}

/// Everything mounting one path should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    pub kind: PlanKind,
    /// Bindings in the order they must be registered.
    pub bindings: Vec<MountBinding>,
    /// Real paths to record under the mounted root.
    pub sub_dirs: Vec<String>,
    /// Required sibling folders, each persisted as its own record.
    pub required: Vec<MountRecord>,
    /// Paths that get a "Start Mount" audit sign.
    pub audit_targets: Vec<String>,
}
