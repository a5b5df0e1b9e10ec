//! Module `registrar`
//!
//! The host's virtual namespace. The core registers bindings but never
//! retracts them: a binding stays resolvable until the process exits.

use log::info;

/// Receives every binding the core establishes.
pub trait NamespaceRegistrar: Send {
    fn register_mount_point(&mut self, virtual_path: &str, real_path: &str);
}

/// Registrar for running outside an editor: records nothing, logs each call.
#[derive(Debug, Default)]
pub struct LoggingRegistrar;

impl NamespaceRegistrar for LoggingRegistrar {
    fn register_mount_point(&mut self, virtual_path: &str, real_path: &str) {
        info!("Registered mount point {} -> {}", virtual_path, real_path);
    }
}
