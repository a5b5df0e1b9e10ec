//! Host result types
//!
//! Defines the outcome of read-only enforcement.

/// What `enforce_readonly` did for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadonlyStatus {
    /// The helper was launched for the path.
    Applied,
    /// The path matches no read-only pattern.
    SkippedNoMatch,
    /// The path should be read-only but the helper executable is absent.
    SkippedMissingTool,
}
