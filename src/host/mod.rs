//! Host collaborators
//!
//! The parts of the host application the core calls out to: the virtual
//! namespace registrar and the external process launcher, plus the read-only
//! enforcement built on the launcher.

pub mod launcher;
pub mod readonly;
pub mod registrar;
pub mod results;

pub use launcher::{ProcessLauncher, SystemLauncher};
pub use readonly::enforce_readonly;
pub use registrar::{LoggingRegistrar, NamespaceRegistrar};
pub use results::ReadonlyStatus;
