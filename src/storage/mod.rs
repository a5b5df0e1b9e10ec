//! Configuration storage
//!
//! The configuration collaborator the core reads rules from and persists the
//! mounted record set into, plus the ini-file implementation used in
//! production.

pub mod ini;
pub mod store;

pub use ini::IniFile;
pub use store::ConfigStore;
