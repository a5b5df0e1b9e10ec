//! Module `core`
//!
//! `MountService` owns every piece of engine state. Collaborators (config
//! stores, namespace registrar, process launcher, host identity) are
//! injected so the whole engine runs against test doubles.
//!
//! Live bindings last for the process only. On startup the persisted records
//! are replayed to rebuild them; unmount removes the record but leaves the
//! binding registered until exit.

use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::audit::{AuditAction, AuditLogger, AuditStatus, HostIdentity};
use crate::host::{NamespaceRegistrar, ProcessLauncher, enforce_readonly};
use crate::record::MountRecord;
use crate::registry::{MOUNT_SECTION, MountRegistry, UnmountStatus};
use crate::resolver::{MountBinding, resolve};
use crate::rules::RuleStore;
use crate::service::results::{MountMethod, RegisterOutcome, StartupReport, UnmountOutcome};
use crate::service::{LEVEL_PATHS_KEY, LEVEL_SECTION, SharedMountService};
use crate::storage::ConfigStore;
use crate::utils::{normalize_dir, parse_value};

/// Settings the service needs beyond what the config files hold.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Namespace prefix every binding lives under.
    pub virtual_root: String,
    /// Executable that makes a folder read-only.
    pub readonly_helper: PathBuf,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            virtual_root: "/Game/".to_string(),
            readonly_helper: PathBuf::from("cmd_MakeFolderReadonly.exe"),
        }
    }
}

pub struct MountService {
    settings: ServiceSettings,
    rules: RuleStore,
    registry: MountRegistry,
    audit: AuditLogger,
    launcher: Box<dyn ProcessLauncher>,
    method: MountMethod,
}

impl MountService {
    /// Loads the rule set from `plugin_config`; the persisted record set is
    /// read from and written to `project_config`.
    pub fn new(
        settings: ServiceSettings,
        plugin_config: &dyn ConfigStore,
        project_config: Box<dyn ConfigStore>,
        registrar: Box<dyn NamespaceRegistrar>,
        launcher: Box<dyn ProcessLauncher>,
        identity: HostIdentity,
    ) -> Self {
        let rules = RuleStore::load(plugin_config);
        let audit = AuditLogger::new(
            rules.log_root().map(PathBuf::from),
            rules.audit_prefixes().to_vec(),
            identity,
        );
        let registry = MountRegistry::new(settings.virtual_root.clone(), project_config, registrar);

        Self {
            settings,
            rules,
            registry,
            audit,
            launcher,
            method: MountMethod::ByDirectory,
        }
    }

    pub fn into_shared(self) -> SharedMountService {
        Arc::new(Mutex::new(self))
    }

    /// Picks the mount method and, for directory mounts, rebuilds the live
    /// bindings from the persisted records.
    pub fn startup(&mut self) -> StartupReport {
        let level_paths = self
            .registry
            .config()
            .get_array(LEVEL_SECTION, LEVEL_PATHS_KEY);
        self.method = if level_paths.is_empty() {
            MountMethod::ByDirectory
        } else {
            MountMethod::ByLevelConfig
        };
        info!("Mount method: {:?}", self.method);

        let records = self.registry.reload_records().to_vec();
        let replayed = match self.method {
            MountMethod::ByLevelConfig => Vec::new(),
            MountMethod::ByDirectory => records
                .iter()
                .map(|record| self.register_mount_point(record.root_dir(), false))
                .collect(),
        };

        StartupReport {
            method: self.method,
            replayed,
        }
    }

    /// Mounts `path`.
    ///
    /// New adds (`is_new_add`) are audited as such and persisted; replays
    /// only rebuild the bindings. A mount whose plan bound nothing is never
    /// persisted.
    pub fn register_mount_point(&mut self, path: &str, is_new_add: bool) -> RegisterOutcome {
        let path = normalize_dir(path);
        let mut audit = Vec::new();

        if is_new_add {
            audit.push(self.audit.write_sign(&path, AuditAction::AddMountPoint));
        }

        let readonly = enforce_readonly(
            &path,
            &self.rules,
            &self.settings.readonly_helper,
            self.launcher.as_mut(),
        );

        let plan = resolve(&path, &self.rules, self.registry.virtual_root());
        for binding in &plan.bindings {
            self.registry
                .add_mount_point(&binding.virtual_path, &binding.real_path);
        }
        for target in &plan.audit_targets {
            audit.push(self.audit.write_sign(target, AuditAction::StartMount));
        }

        let mut required = Vec::new();
        let mut persisted = None;
        if is_new_add {
            for record in &plan.required {
                required.push(self.registry.add_record(record.clone()));
            }
            if !plan.sub_dirs.is_empty() {
                let record = MountRecord::new(path.clone(), plan.sub_dirs.clone());
                persisted = Some(self.registry.add_record(record));
            }
        }

        RegisterOutcome {
            path,
            is_new_add,
            readonly,
            plan,
            persisted,
            required,
            audit,
        }
    }

    /// Mounts every directory the user picked. An empty pick does nothing.
    pub fn mount_selection(&mut self, paths: &[String]) -> Vec<RegisterOutcome> {
        paths
            .iter()
            .filter(|path| !path.trim().is_empty())
            .map(|path| self.register_mount_point(path, true))
            .collect()
    }

    /// Mounts the recommended folder configured under `name`.
    pub fn mount_optional(&mut self, name: &str) -> Option<RegisterOutcome> {
        let path = self.rules.optional_dir(name)?.to_string();
        Some(self.register_mount_point(&path, true))
    }

    /// Forgets the first persisted record rooted at `root_dir`.
    ///
    /// `root_dir` is normalized the same way a registered path is, so the
    /// text used to mount a directory also unmounts it.
    pub fn unmount(&mut self, root_dir: &str) -> UnmountOutcome {
        let root_dir = normalize_dir(root_dir);
        info!("unmount: {}", root_dir);
        let status = self.registry.remove_record(&root_dir);
        let audit = match &status {
            UnmountStatus::Removed(record) => Some(
                self.audit
                    .write_sign(record.root_dir(), AuditAction::RemoveMountPoint),
            ),
            UnmountStatus::NotFound => None,
        };
        UnmountOutcome { status, audit }
    }

    /// Writes the end-of-session audit signs.
    pub fn shutdown(&mut self) -> Vec<AuditStatus> {
        match self.method {
            MountMethod::ByDirectory => {
                let roots: Vec<String> = self
                    .registry
                    .reload_records()
                    .iter()
                    .map(|record| record.root_dir().to_string())
                    .collect();
                roots
                    .iter()
                    .map(|root| self.audit.write_sign(root, AuditAction::StopMount))
                    .collect()
            }
            MountMethod::ByLevelConfig => {
                let levels: Vec<String> = self
                    .registry
                    .config()
                    .get_array(MOUNT_SECTION, LEVEL_PATHS_KEY)
                    .iter()
                    .filter_map(|entry| parse_value(entry, "Level="))
                    .collect();
                levels
                    .iter()
                    .map(|level| self.audit.write_sign(level, AuditAction::StopMountLevel))
                    .collect()
            }
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Persisted records, as listed by the unmount menu.
    pub fn records(&self) -> &[MountRecord] {
        self.registry.records()
    }

    pub fn bindings(&self) -> Vec<MountBinding> {
        self.registry.bindings()
    }

    pub fn mount_paths(&self) -> &[String] {
        self.registry.mount_paths()
    }

    pub fn registry(&self) -> &MountRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn method(&self) -> MountMethod {
        self.method
    }
}
