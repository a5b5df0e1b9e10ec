//! Mount registry
//!
//! Owns the live binding table (virtual path to real path and back) and the
//! persisted set of mounted records.

pub mod core;
pub mod results;

pub use self::core::MountRegistry;
pub use results::{PersistStatus, UnmountStatus};

/// Where the persisted record set lives in the project config.
pub const MOUNT_SECTION: &str = "MountConfig";
pub const MOUNTED_DIRS_KEY: &str = "MountedDirs";
