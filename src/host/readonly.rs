//! Read-only enforcement
//!
//! Folders matching a read-only pattern are handed to an external helper
//! (`<helper> -readonly <path>`). This is best-effort hardening: the helper
//! runs detached and its outcome is never observed.

use log::{debug, info};
use std::path::Path;

use crate::host::launcher::ProcessLauncher;
use crate::host::results::ReadonlyStatus;
use crate::rules::RuleStore;

/// Launches the read-only helper for `path` when a pattern matches.
pub fn enforce_readonly(
    path: &str,
    rules: &RuleStore,
    helper: &Path,
    launcher: &mut dyn ProcessLauncher,
) -> ReadonlyStatus {
    if !rules.is_readonly(path) {
        return ReadonlyStatus::SkippedNoMatch;
    }

    if !helper.is_file() {
        debug!(
            "Read-only helper {} missing, leaving {} writable",
            helper.display(),
            path
        );
        return ReadonlyStatus::SkippedMissingTool;
    }

    info!("Making {} read-only", path);
    launcher.launch(helper, &["-readonly", path]);
    ReadonlyStatus::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::IniFile;
    use std::fs;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingLauncher {
        calls: Vec<(PathBuf, Vec<String>)>,
    }

    impl ProcessLauncher for RecordingLauncher {
        fn launch(&mut self, program: &Path, args: &[&str]) {
            self.calls.push((
                program.to_path_buf(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
        }
    }

    fn rules() -> RuleStore {
        RuleStore::load(&IniFile::parse(
            "[ReadonlyMountPath]\n+Path=//fileserver/release\n",
        ))
    }

    #[test]
    fn test_applied_when_pattern_and_helper_present() {
        let dir = tempfile::tempdir().unwrap();
        let helper = dir.path().join("cmd_MakeFolderReadonly.exe");
        fs::write(&helper, "").unwrap();

        let mut launcher = RecordingLauncher::default();
        let status = enforce_readonly("//fileserver/release/Pack", &rules(), &helper, &mut launcher);

        assert_eq!(status, ReadonlyStatus::Applied);
        assert_eq!(
            launcher.calls,
            vec![(
                helper.clone(),
                vec!["-readonly".to_string(), "//fileserver/release/Pack".to_string()]
            )]
        );
    }

    #[test]
    fn test_skipped_without_match() {
        let mut launcher = RecordingLauncher::default();
        let status = enforce_readonly("D:/Local/Pack", &rules(), Path::new("/bin/true"), &mut launcher);
        assert_eq!(status, ReadonlyStatus::SkippedNoMatch);
        assert!(launcher.calls.is_empty());
    }

    #[test]
    fn test_skipped_without_helper() {
        let mut launcher = RecordingLauncher::default();
        let status = enforce_readonly(
            "//fileserver/release/Pack",
            &rules(),
            Path::new("/no/such/helper.exe"),
            &mut launcher,
        );
        assert_eq!(status, ReadonlyStatus::SkippedMissingTool);
        assert!(launcher.calls.is_empty());
    }
}
