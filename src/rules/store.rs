//! Module `store`
//!
//! `RuleStore` is loaded once from the plugin config and is read-only
//! afterwards. Rules stay in load order: the first matching rule wins even
//! when a later one is more specific.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::rules::entry::RuleEntry;
use crate::rules::keys;
use crate::storage::ConfigStore;
use crate::utils::contains_ignore_case;

#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<RuleEntry>,
    readonly_patterns: Vec<String>,
    log_root: Option<PathBuf>,
    audit_prefixes: Vec<String>,
    optional_dirs: Vec<(String, String)>,
    must_mount_dirs: Vec<(String, String)>,
}

impl RuleStore {
    /// Reads every rule list from `config`.
    ///
    /// Entries without a `SubDir=` field are skipped. Of the configured log
    /// roots, the first one that exists as a directory is kept.
    pub fn load(config: &dyn ConfigStore) -> Self {
        let mut rules = Vec::new();
        for value in config.get_array(keys::RULE_SECTION, keys::RULE_KEY) {
            match RuleEntry::parse(&value) {
                Some(rule) => {
                    info!("Mount rule: {} -> {}", rule.match_key(), rule.raw_entry());
                    rules.push(rule);
                }
                None => debug!("Skipping mount rule without SubDir: {}", value),
            }
        }

        let log_root = config
            .get_array(keys::LOG_ROOT_SECTION, keys::PATH_KEY)
            .into_iter()
            .map(PathBuf::from)
            .find(|p| p.is_dir());
        match &log_root {
            Some(root) => info!("Mount log root: {}", root.display()),
            None => debug!("No mount log root available, audit signs disabled"),
        }

        Self {
            rules,
            readonly_patterns: config.get_array(keys::READONLY_SECTION, keys::PATH_KEY),
            log_root,
            audit_prefixes: config.get_array(keys::NEED_LOG_SECTION, keys::PATH_KEY),
            optional_dirs: config.section_entries(keys::OPTIONAL_SECTION),
            must_mount_dirs: config.section_entries(keys::MUST_MOUNT_SECTION),
        }
    }

    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    /// First rule, in load order, whose key occurs in `path`.
    pub fn matching_rule(&self, path: &str) -> Option<&RuleEntry> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn is_readonly(&self, path: &str) -> bool {
        self.readonly_patterns
            .iter()
            .any(|pattern| contains_ignore_case(path, pattern))
    }

    pub fn log_root(&self) -> Option<&Path> {
        self.log_root.as_deref()
    }

    pub fn audit_prefixes(&self) -> &[String] {
        &self.audit_prefixes
    }

    /// `OptionalMountList` entries: recommended folders offered by name.
    pub fn optional_dirs(&self) -> &[(String, String)] {
        &self.optional_dirs
    }

    /// Path of the optional folder called `name`, unquoted.
    pub fn optional_dir(&self, name: &str) -> Option<&str> {
        self.optional_dirs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, path)| path.trim_matches('"'))
    }

    /// `Server` entries, passed through for the UI.
    pub fn must_mount_dirs(&self) -> &[(String, String)] {
        &self.must_mount_dirs
    }
}
