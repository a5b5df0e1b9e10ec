//! Mount service
//!
//! The composition root of the engine: wires rules, resolver, registry,
//! read-only enforcement and audit logging behind the operations the UI
//! layer triggers (startup, mount, unmount, shutdown).

pub mod core;
pub mod results;

pub use self::core::{MountService, ServiceSettings};
pub use results::{MountMethod, RegisterOutcome, StartupReport, UnmountOutcome};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Service shared between tasks.
///
/// Mount and unmount are read-modify-write cycles over the persisted set, so
/// every caller must hold this one lock across the whole operation.
pub type SharedMountService = Arc<Mutex<MountService>>;

/// Section/key selecting the level-based mount method when non-empty.
pub const LEVEL_SECTION: &str = "LevelMountPath";
pub const LEVEL_PATHS_KEY: &str = "MountedPaths";
