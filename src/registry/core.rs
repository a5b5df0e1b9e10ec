//! Module `core`
//!
//! `MountRegistry` keeps two kinds of state with different lifetimes:
//!
//! * the live binding table, rebuilt every process start and only ever grown:
//!   bindings are registered with the host but never retracted;
//! * the persisted record set, stored in the project config. Every change
//!   re-reads the set, edits it and rewrites it whole.

use log::{info, warn};
use std::collections::BTreeMap;

use crate::host::NamespaceRegistrar;
use crate::record::MountRecord;
use crate::registry::results::{PersistStatus, UnmountStatus};
use crate::registry::{MOUNT_SECTION, MOUNTED_DIRS_KEY};
use crate::resolver::MountBinding;
use crate::storage::ConfigStore;

pub struct MountRegistry {
    virtual_root: String,
    bindings: BTreeMap<String, String>,
    real_to_virtual: BTreeMap<String, String>,
    mount_paths: Vec<String>,
    records: Vec<MountRecord>,
    config: Box<dyn ConfigStore>,
    registrar: Box<dyn NamespaceRegistrar>,
}

impl MountRegistry {
    pub fn new(
        virtual_root: impl Into<String>,
        config: Box<dyn ConfigStore>,
        registrar: Box<dyn NamespaceRegistrar>,
    ) -> Self {
        let mut virtual_root = virtual_root.into();
        if !virtual_root.ends_with('/') {
            virtual_root.push('/');
        }
        Self {
            virtual_root,
            bindings: BTreeMap::new(),
            real_to_virtual: BTreeMap::new(),
            mount_paths: Vec::new(),
            records: Vec::new(),
            config,
            registrar,
        }
    }

    // --------------------
    // Live bindings
    // --------------------

    /// Binds `virtual_path` to `real_path`, replacing any earlier binding of
    /// the same virtual path, and forwards it to the host.
    pub fn add_mount_point(&mut self, virtual_path: &str, real_path: &str) -> MountBinding {
        let binding = MountBinding::new(virtual_path, real_path);

        self.bindings
            .insert(binding.virtual_path.clone(), binding.real_path.clone());
        self.real_to_virtual
            .insert(binding.real_path.clone(), binding.virtual_path.clone());

        if binding.virtual_path != self.virtual_root
            && !self.mount_paths.contains(&binding.virtual_path)
        {
            self.mount_paths.push(binding.virtual_path.clone());
        }

        self.registrar
            .register_mount_point(&binding.virtual_path, &binding.real_path);
        binding
    }

    /// Real path currently bound to `virtual_path`.
    pub fn binding(&self, virtual_path: &str) -> Option<&str> {
        let lookup = MountBinding::new(virtual_path, "");
        self.bindings.get(&lookup.virtual_path).map(String::as_str)
    }

    /// Most recent virtual path bound to `real_path`.
    pub fn virtual_for(&self, real_path: &str) -> Option<&str> {
        self.real_to_virtual.get(real_path).map(String::as_str)
    }

    /// Every live binding, ordered by virtual path.
    pub fn bindings(&self) -> Vec<MountBinding> {
        self.bindings
            .iter()
            .map(|(v, r)| MountBinding::new(v.as_str(), r.as_str()))
            .collect()
    }

    /// Virtual paths mounted so far, first-seen order, namespace root excluded.
    pub fn mount_paths(&self) -> &[String] {
        &self.mount_paths
    }

    pub fn virtual_root(&self) -> &str {
        &self.virtual_root
    }

    // --------------------
    // Persisted records
    // --------------------

    /// Records as of the last load or write.
    pub fn records(&self) -> &[MountRecord] {
        &self.records
    }

    /// Re-reads the persisted set from config into the cache.
    pub fn reload_records(&mut self) -> &[MountRecord] {
        self.records = self.read_records();
        &self.records
    }

    /// Appends `record` unless a record with the same root already exists.
    pub fn add_record(&mut self, record: MountRecord) -> PersistStatus {
        let mut records = self.read_records();
        if records.iter().any(|r| r.same_root(record.root_dir())) {
            return PersistStatus::Duplicate;
        }

        info!("Persisting mount {}", record);
        records.push(record);
        self.write_records(records);
        PersistStatus::Inserted
    }

    /// Removes the first record whose root equals `root_dir`.
    ///
    /// Later records with the same root are left in place.
    pub fn remove_record(&mut self, root_dir: &str) -> UnmountStatus {
        let mut records = self.read_records();
        let Some(index) = records.iter().position(|r| r.same_root(root_dir)) else {
            return UnmountStatus::NotFound;
        };

        let removed = records.remove(index);
        info!("Removed persisted mount {}", removed);
        self.write_records(records);
        UnmountStatus::Removed(removed)
    }

    /// Raw access to the project config for keys outside the record set.
    pub fn config(&self) -> &dyn ConfigStore {
        self.config.as_ref()
    }

    fn read_records(&self) -> Vec<MountRecord> {
        self.config
            .get_array(MOUNT_SECTION, MOUNTED_DIRS_KEY)
            .iter()
            .map(|raw| MountRecord::parse(raw))
            .collect()
    }

    fn write_records(&mut self, records: Vec<MountRecord>) {
        let values: Vec<String> = records.iter().map(MountRecord::to_string).collect();
        self.config
            .set_array(MOUNT_SECTION, MOUNTED_DIRS_KEY, &values);
        if let Err(e) = self.config.flush() {
            warn!("Mounted set kept in memory only: {}", e);
        }
        self.records = records;
    }
}
