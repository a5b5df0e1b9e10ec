//! Registry result types
//!
//! Defines the outcomes of changes to the persisted record set.

use crate::record::MountRecord;

/// Outcome of adding a record to the persisted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Inserted,
    /// A record with the same root already exists; it was kept as is.
    Duplicate,
}

/// Outcome of removing a record from the persisted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmountStatus {
    /// The first record with the requested root was removed.
    Removed(MountRecord),
    NotFound,
}
