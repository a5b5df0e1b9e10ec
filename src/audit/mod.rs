//! Audit trail
//!
//! Best-effort, per-user log files recording who mounted or unmounted what,
//! when and from which machine.

pub mod identity;
pub mod logger;
pub mod results;

pub use identity::HostIdentity;
pub use logger::AuditLogger;
pub use results::{AuditAction, AuditStatus};
