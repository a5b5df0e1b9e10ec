//! Module `logger`
//!
//! Writes audit signs for directories under an audit-eligible prefix.
//!
//! Each user has one log file per mounted location. The file's name is its
//! latest line plus `.txt`, so the log root can be browsed by name alone:
//!
//! ```text
//! <log root>/D/Projects/Shared/2026.10.19-09.30.00 - WS-042 - alice - 10.0.0.7 - Start Mount.txt
//! ```
//!
//! A write appends to the first `*.txt` under the location's log directory
//! whose name contains the username and renames it after the new line, or
//! creates the file when none exists. Failures are logged and swallowed.

use chrono::Local;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::audit::identity::HostIdentity;
use crate::audit::results::{AuditAction, AuditStatus};
use crate::utils::{contains_ignore_case, join};

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d-%H.%M.%S";

#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_root: Option<PathBuf>,
    prefixes: Vec<String>,
    identity: HostIdentity,
}

impl AuditLogger {
    pub fn new(log_root: Option<PathBuf>, prefixes: Vec<String>, identity: HostIdentity) -> Self {
        Self {
            log_root,
            prefixes,
            identity,
        }
    }

    pub fn identity(&self) -> &HostIdentity {
        &self.identity
    }

    /// Records `action` against `dir`.
    pub fn write_sign(&self, dir: &str, action: AuditAction) -> AuditStatus {
        let Some(root) = self.log_root.as_deref().filter(|root| root.is_dir()) else {
            return AuditStatus::SkippedNoLogRoot;
        };

        if !self
            .prefixes
            .iter()
            .any(|prefix| contains_ignore_case(dir, prefix))
        {
            debug!("No audit for {} ({})", dir, action);
            return AuditStatus::SkippedNotEligible;
        }

        let line = self.compose_line(action);
        let log_dir = root.join(log_subdir(dir));

        let result = match self.find_user_log(&log_dir) {
            Some(existing) => append_and_rename(&existing, &log_dir, &line).map(AuditStatus::Appended),
            None => create_log(&log_dir, &line).map(AuditStatus::Created),
        };

        match result {
            Ok(status) => {
                info!("Audit: {} [{}]", line, dir);
                status
            }
            Err(e) => {
                warn!("Failed to write audit sign for {}: {}", dir, e);
                AuditStatus::Failed
            }
        }
    }

    fn compose_line(&self, action: AuditAction) -> String {
        format!(
            "{} - {} - {} - {} - {}",
            Local::now().format(TIMESTAMP_FORMAT),
            self.identity.hostname,
            self.identity.username,
            self.identity.local_ip,
            action
        )
    }

    fn find_user_log(&self, log_dir: &Path) -> Option<PathBuf> {
        if !log_dir.is_dir() {
            return None;
        }
        WalkDir::new(log_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| {
                let name = entry.file_name().to_string_lossy();
                name.ends_with(".txt") && name.contains(self.identity.username.as_str())
            })
            .map(|entry| entry.into_path())
    }
}

/// Log directory for `dir`, relative to the log root.
///
/// `D:/Projects/Shared` maps to `D/Projects/Shared` and `//server/share`
/// to `server/share`. Other paths log straight into the root. The result is
/// always relative: empty, `.`, `..` and drive-like segments are dropped so
/// the log can never leave the root.
pub fn log_subdir(dir: &str) -> String {
    let nested = if let Some((drive, rest)) = dir.split_once(":/") {
        join(drive, rest)
    } else if let Some(unc) = dir.strip_prefix("//") {
        unc.to_string()
    } else {
        String::new()
    };

    nested
        .split(['/', '\\'])
        .filter(|seg| !seg.is_empty() && *seg != "." && *seg != ".." && !seg.contains(':'))
        .collect::<Vec<_>>()
        .join("/")
}

fn append_and_rename(existing: &Path, log_dir: &Path, line: &str) -> io::Result<PathBuf> {
    let mut lines: Vec<String> = fs::read_to_string(existing)?
        .lines()
        .map(str::to_string)
        .collect();
    lines.push(line.to_string());
    fs::write(existing, lines.join("\n") + "\n")?;

    let renamed = log_dir.join(format!("{}.txt", line));
    fs::rename(existing, &renamed)?;
    Ok(renamed)
}

fn create_log(log_dir: &Path, line: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(format!("{}.txt", line));
    fs::write(&path, format!("{}\n", line))?;
    Ok(path)
}
