//! Ini file storage
//!
//! Reads and writes the host editor's ini dialect:
//!
//! ```ini
//! [MountRule]
//! +Rule=(SubDir="Art",Requires="Core,Shared")
//! ; comment
//! [MountConfig]
//! MountedDirs=(RootDir="D:/External/Foo",SubDirs="D:/External/Foo")
//! ```
//!
//! `+Key=` appends unless the value is already present, `Key=` and `.Key=`
//! always append, `-Key=` removes a value and `!Key` clears the key.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::store::ConfigStore;

#[derive(Debug, Clone, Default)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

/// An ini file held in memory, optionally backed by a path on disk.
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    path: Option<PathBuf>,
    sections: Vec<Section>,
}

impl IniFile {
    /// Loads `path`. A missing file yields an empty store bound to that path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let text = if path.exists() {
            fs::read_to_string(&path).map_err(|e| StorageError::ReadFailed(path.clone(), e))?
        } else {
            info!("Config {} not found, starting empty", path.display());
            String::new()
        };

        let mut file = Self::parse(&text);
        file.path = Some(path);
        Ok(file)
    }

    /// Parses ini text into an in-memory store whose flush is a no-op.
    pub fn parse(text: &str) -> Self {
        let mut file = Self::default();
        let mut current: Option<usize> = None;

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = Some(file.section_index(name.trim()));
                continue;
            }

            let Some(index) = current else {
                debug!("Ignoring line {} outside any section: {}", number + 1, line);
                continue;
            };
            let section = &mut file.sections[index];

            if let Some(key) = line.strip_prefix('!') {
                let key = key.split('=').next().unwrap_or("").trim();
                section.entries.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!("Ignoring malformed line {}: {}", number + 1, line);
                continue;
            };
            let value = value.trim().to_string();

            match key.trim().chars().next() {
                Some('+') => {
                    let key = key.trim()[1..].trim();
                    if !section.values(key).any(|v| *v == value) {
                        section.entries.push((key.to_string(), value));
                    }
                }
                Some('-') => {
                    let key = key.trim()[1..].trim();
                    section
                        .entries
                        .retain(|(k, v)| !(k.eq_ignore_ascii_case(key) && *v == value));
                }
                Some('.') => {
                    let key = key.trim()[1..].trim();
                    section.entries.push((key.to_string(), value));
                }
                _ => section.entries.push((key.trim().to_string(), value)),
            }
        }

        file
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Renders the whole store back to ini text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.entries {
                out.push_str(&format!("{}={}\n", key, value));
            }
            out.push('\n');
        }
        out
    }

    fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    fn section_index(&mut self, name: &str) -> usize {
        match self
            .sections
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
        {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        }
    }
}

impl ConfigStore for IniFile {
    fn get_array(&self, section: &str, key: &str) -> Vec<String> {
        self.find_section(section)
            .map(|s| s.values(key).cloned().collect())
            .unwrap_or_default()
    }

    fn set_array(&mut self, section: &str, key: &str, values: &[String]) {
        let index = self.section_index(section);
        let section = &mut self.sections[index];

        // New values take the slot of the first old one so key order is stable.
        let slot = section
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
            .unwrap_or(section.entries.len());
        section.entries.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
        let slot = slot.min(section.entries.len());

        let fresh = values.iter().map(|v| (key.to_string(), v.clone()));
        section.entries.splice(slot..slot, fresh);
    }

    fn section_entries(&self, section: &str) -> Vec<(String, String)> {
        self.find_section(section)
            .map(|s| s.entries.clone())
            .unwrap_or_default()
    }

    /// Writes a sibling temp file and renames it over the target, so readers
    /// see either the previous file or the new one, never a partial write.
    fn flush(&mut self) -> Result<(), StorageError> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed(path.clone(), e))?;
        }

        let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        fs::write(&temp_path, self.render())
            .map_err(|e| StorageError::WriteFailed(temp_path.clone(), e))?;
        fs::rename(&temp_path, &path).map_err(|e| StorageError::WriteFailed(path.clone(), e))?;

        debug!("Flushed config {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
; plugin settings
[MountRule]
+Rule=(SubDir="Art",Requires="Core,Shared")
+Rule=(SubDir="Art",Requires="Core,Shared")
+Rule=(SubDir="Audio")

[OptionalMountList]
Props=D:/Library/Props
Foliage=D:/Library/Foliage
"#;

    #[test]
    fn test_plus_prefix_appends_unique() {
        let ini = IniFile::parse(SAMPLE);
        assert_eq!(
            ini.get_array("MountRule", "Rule"),
            vec![
                r#"(SubDir="Art",Requires="Core,Shared")"#.to_string(),
                r#"(SubDir="Audio")"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_section_lookup_ignores_case() {
        let ini = IniFile::parse(SAMPLE);
        assert_eq!(ini.get_array("mountrule", "RULE").len(), 2);
        assert!(ini.get_array("Missing", "Rule").is_empty());
    }

    #[test]
    fn test_section_entries_keep_order() {
        let ini = IniFile::parse(SAMPLE);
        let entries = ini.section_entries("OptionalMountList");
        assert_eq!(entries[0], ("Props".into(), "D:/Library/Props".into()));
        assert_eq!(entries[1], ("Foliage".into(), "D:/Library/Foliage".into()));
    }

    #[test]
    fn test_remove_and_clear_prefixes() {
        let ini = IniFile::parse("[S]\nK=a\nK=b\n-K=a\n[T]\nK=x\n!K\nK=y\n");
        assert_eq!(ini.get_array("S", "K"), vec!["b".to_string()]);
        assert_eq!(ini.get_array("T", "K"), vec!["y".to_string()]);
    }

    #[test]
    fn test_set_array_keeps_duplicates_and_slot() {
        let mut ini = IniFile::parse("[MountConfig]\nA=1\nMountedDirs=x\nB=2\n");
        ini.set_array(
            "MountConfig",
            "MountedDirs",
            &["p".to_string(), "p".to_string()],
        );
        let keys: Vec<String> = ini
            .section_entries("MountConfig")
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["A", "MountedDirs", "MountedDirs", "B"]);
        assert_eq!(ini.get_array("MountConfig", "MountedDirs").len(), 2);
    }

    #[test]
    fn test_flush_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config").join("DefaultGame.ini");

        let mut ini = IniFile::open(&path).unwrap();
        assert!(ini.get_array("MountConfig", "MountedDirs").is_empty());

        let values = vec![r#"(RootDir="D:/A",SubDirs="D:/A")"#.to_string()];
        ini.set_array("MountConfig", "MountedDirs", &values);
        ini.flush().unwrap();

        let reopened = IniFile::open(&path).unwrap();
        assert_eq!(reopened.get_array("MountConfig", "MountedDirs"), values);
        assert!(!path.with_file_name("DefaultGame.ini.tmp").exists());
    }

    #[test]
    fn test_in_memory_flush_is_noop() {
        let mut ini = IniFile::parse(SAMPLE);
        assert!(ini.path().is_none());
        assert!(ini.flush().is_ok());
    }
}
