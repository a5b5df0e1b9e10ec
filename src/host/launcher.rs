//! Module `launcher`
//!
//! Fire-and-forget launching of external helper executables.

use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Starts an executable without waiting for it.
pub trait ProcessLauncher: Send {
    fn launch(&mut self, program: &Path, args: &[&str]);
}

/// Spawns real processes. The child is never joined and its exit status is
/// never read.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&mut self, program: &Path, args: &[&str]) {
        match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => debug!("Launched {} (pid {})", program.display(), child.id()),
            Err(e) => warn!("Failed to launch {}: {}", program.display(), e),
        }
    }
}
