//! Mount resolution
//!
//! Turns an absolute directory path into the set of virtual-path bindings
//! that mounting it should create. Resolution is a pure function of the path,
//! the rule set and (for `Content` folders) the directory listing.

pub mod operations;
pub mod results;

pub use operations::{CONTENT_DIR, resolve};
pub use results::{MountBinding, PlanKind, ResolutionPlan};
