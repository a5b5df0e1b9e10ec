//! Module `record`
//!
//! Defines `MountRecord`, the persisted description of one mounted root
//! directory and the concrete sub-paths it expanded into.
//!
//! Records are stored one per config value as
//! `(RootDir="<root>",SubDirs="<a,b,c>")`. Older configs stored a bare path,
//! which is still accepted and is rewritten in the structured form the next
//! time the set is saved.

use std::fmt;

use crate::utils::{parse_value, split_paths};

/// One persisted mount entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MountRecord {
    root_dir: String,
    sub_dirs: Vec<String>,
}

impl MountRecord {
    pub fn new(root_dir: impl Into<String>, sub_dirs: Vec<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            sub_dirs,
        }
    }

    /// A record whose only bound path is its own root.
    pub fn standalone(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            sub_dirs: vec![path.clone()],
            root_dir: path,
        }
    }

    /// Parses a structured token, falling back to the legacy bare-path form.
    ///
    /// Sub-paths keep their surrounding whitespace. `SubDirs` is a plain
    /// comma list, so a sub-path containing a `,` cannot be stored.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix('(') {
            Some(body) => {
                let body = body.strip_suffix(')').unwrap_or(body);
                Self {
                    root_dir: parse_value(body, "RootDir=").unwrap_or_default(),
                    sub_dirs: parse_value(body, "SubDirs=")
                        .map(|subs| split_paths(&subs))
                        .unwrap_or_default(),
                }
            }
            None => Self::standalone(raw),
        }
    }

    pub fn root_dir(&self) -> &str {
        &self.root_dir
    }

    pub fn sub_dirs(&self) -> &[String] {
        &self.sub_dirs
    }

    /// Records are keyed by root directory, compared case-insensitively.
    pub fn same_root(&self, root_dir: &str) -> bool {
        self.root_dir.eq_ignore_ascii_case(root_dir)
    }
}

impl fmt::Display for MountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(RootDir=\"{}\",SubDirs=\"{}\")",
            self.root_dir,
            self.sub_dirs.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_format() {
        let record = MountRecord::new(
            "D:/Packs/MyPack/Content",
            vec![
                "D:/Packs/MyPack/Content/Maps".to_string(),
                "D:/Packs/MyPack/Content/Meshes".to_string(),
            ],
        );
        assert_eq!(
            record.to_string(),
            r#"(RootDir="D:/Packs/MyPack/Content",SubDirs="D:/Packs/MyPack/Content/Maps,D:/Packs/MyPack/Content/Meshes")"#
        );
    }

    #[test]
    fn test_round_trip() {
        let records = [
            MountRecord::standalone("D:/External/Foo"),
            MountRecord::new("//server/share/Art", vec![]),
            MountRecord::new(
                "/srv/assets/Content",
                vec!["/srv/assets/Content/A".into(), "/srv/assets/Content/B".into()],
            ),
        ];
        for record in records {
            assert_eq!(MountRecord::parse(&record.to_string()), record);
        }
    }

    #[test]
    fn test_sub_dirs_keep_surrounding_spaces() {
        let record = MountRecord::new(
            "D:/Packs/Odd",
            vec!["D:/Packs/Odd/ Intro".into(), "D:/Packs/Odd/Outro ".into()],
        );
        let parsed = MountRecord::parse(&record.to_string());
        assert_eq!(parsed, record);
        assert_eq!(parsed.sub_dirs()[1], "D:/Packs/Odd/Outro ");
    }

    #[test]
    fn test_legacy_bare_path() {
        let record = MountRecord::parse("D:/External/Foo");
        assert_eq!(record.root_dir(), "D:/External/Foo");
        assert_eq!(record.sub_dirs(), ["D:/External/Foo".to_string()]);
    }

    #[test]
    fn test_same_root_ignores_case() {
        let record = MountRecord::standalone("D:/External/Foo");
        assert!(record.same_root("d:/external/FOO"));
        assert!(!record.same_root("D:/External/Foobar"));
    }
}
