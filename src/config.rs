//! Configuration management for the mount manager
//!
//! Application settings say where the two ini files live and how the
//! namespace is named. They come from an optional `mount.toml` next to the
//! binary, overridden by `MOUNT_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::service::ServiceSettings;

/// Plugin ini file name, under `<plugin_dir>/Config`.
pub const PLUGIN_INI_NAME: &str = "MountPluginConfig.ini";
/// Project ini file name, under `<project_dir>/Config`.
pub const PROJECT_INI_NAME: &str = "MountConfig.ini";
/// Read-only helper executable, under `<plugin_dir>`.
pub const READONLY_HELPER_NAME: &str = "cmd_MakeFolderReadonly.exe";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Project root; holds `Config/MountConfig.ini`.
    /// Environment: MOUNT_PROJECT_DIR
    pub project_dir: String,

    /// Plugin root; defaults to `<project_dir>/Plugins/Mount`.
    /// Environment: MOUNT_PLUGIN_DIR
    pub plugin_dir: Option<String>,

    /// Namespace prefix for every binding.
    /// Environment: MOUNT_VIRTUAL_ROOT
    pub virtual_root: String,
}

impl AppConfig {
    /// Load configuration from mount.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("project_dir", ".")?
            .set_default("virtual_root", "/Game/")?
            .add_source(File::with_name("mount").required(false))
            .add_source(
                Environment::with_prefix("MOUNT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.project_dir.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "project_dir cannot be empty".into(),
            ));
        }

        if !self.virtual_root.starts_with('/') {
            return Err(config::ConfigError::Message(format!(
                "virtual_root must start with '/': {}",
                self.virtual_root
            )));
        }

        Ok(())
    }

    pub fn plugin_dir(&self) -> PathBuf {
        match &self.plugin_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(&self.project_dir).join("Plugins").join("Mount"),
        }
    }

    pub fn plugin_config_path(&self) -> PathBuf {
        self.plugin_dir().join("Config").join(PLUGIN_INI_NAME)
    }

    pub fn project_config_path(&self) -> PathBuf {
        PathBuf::from(&self.project_dir)
            .join("Config")
            .join(PROJECT_INI_NAME)
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            virtual_root: self.virtual_root.clone(),
            readonly_helper: self.plugin_dir().join(READONLY_HELPER_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config(project_dir: &str, plugin_dir: Option<&str>) -> AppConfig {
        AppConfig {
            project_dir: project_dir.to_string(),
            plugin_dir: plugin_dir.map(str::to_string),
            virtual_root: "/Game/".to_string(),
        }
    }

    #[test]
    fn test_default_layout() {
        let config = app_config("/work/MyGame", None);
        assert_eq!(
            config.plugin_config_path(),
            PathBuf::from("/work/MyGame/Plugins/Mount/Config/MountPluginConfig.ini")
        );
        assert_eq!(
            config.project_config_path(),
            PathBuf::from("/work/MyGame/Config/MountConfig.ini")
        );
        assert_eq!(
            config.service_settings().readonly_helper,
            PathBuf::from("/work/MyGame/Plugins/Mount/cmd_MakeFolderReadonly.exe")
        );
    }

    #[test]
    fn test_explicit_plugin_dir() {
        let config = app_config("/work/MyGame", Some("/engine/Plugins/Mount"));
        assert_eq!(
            config.plugin_config_path(),
            PathBuf::from("/engine/Plugins/Mount/Config/MountPluginConfig.ini")
        );
    }

    #[test]
    fn test_validate() {
        assert!(app_config("/work", None).validate().is_ok());
        assert!(app_config("  ", None).validate().is_err());

        let mut config = app_config("/work", None);
        config.virtual_root = "Game/".to_string();
        assert!(config.validate().is_err());
    }
}
