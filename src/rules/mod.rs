//! Mount rules
//!
//! Loads the plugin's rule set: path rewrite rules, read-only folder
//! patterns, audit settings and the named directory lists shown in the UI.

pub mod entry;
pub mod store;

pub use entry::RuleEntry;
pub use store::RuleStore;

/// Section and key names read from the plugin config.
pub mod keys {
    pub const RULE_SECTION: &str = "MountRule";
    pub const RULE_KEY: &str = "Rule";
    pub const READONLY_SECTION: &str = "ReadonlyMountPath";
    pub const LOG_ROOT_SECTION: &str = "MountLogRootPath";
    pub const NEED_LOG_SECTION: &str = "MountNeedLogDir";
    pub const PATH_KEY: &str = "Path";
    pub const OPTIONAL_SECTION: &str = "OptionalMountList";
    pub const MUST_MOUNT_SECTION: &str = "Server";
}
