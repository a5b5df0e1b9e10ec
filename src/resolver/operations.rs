//! Resolver operations
//!
//! Three strategies, tried in order:
//!
//! 1. Rule: the first rule (load order) whose key occurs in the path splits
//!    it at the key's LAST occurrence. The remainder after the key becomes the
//!    virtual sub-path, and every `Requires=` folder is bound from the same
//!    parent.
//! 2. `Content` folder: each immediate child directory is bound one level
//!    down. The namespace root itself is never bound, otherwise saved assets
//!    would not reach the external disk.
//! 3. Anything else is bound under its own base name.

use log::{info, warn};
use std::fs;

use crate::record::MountRecord;
use crate::resolver::results::{MountBinding, PlanKind, ResolutionPlan};
use crate::rules::{RuleEntry, RuleStore};
use crate::utils::{base_name, join, rsplit_ignore_case};

/// Folder name whose children are mounted instead of the folder itself.
pub const CONTENT_DIR: &str = "Content";

/// Computes the bindings for mounting `path` under `virtual_root`.
pub fn resolve(path: &str, rules: &RuleStore, virtual_root: &str) -> ResolutionPlan {
    let matched = rules.rules().iter().find_map(|rule| {
        rsplit_ignore_case(path, rule.match_key()).map(|(left, right)| (rule, left, right))
    });

    let plan = match matched {
        Some((rule, left, right)) => resolve_by_rule(path, rule, left, right, virtual_root),
        None if base_name(path) == CONTENT_DIR => resolve_content_children(path, virtual_root),
        None => resolve_single_folder(path, virtual_root),
    };

    for binding in &plan.bindings {
        info!("mount: {} -> {}", binding.virtual_path, binding.real_path);
    }
    plan
}

fn resolve_by_rule(
    path: &str,
    rule: &RuleEntry,
    left: &str,
    right: &str,
    virtual_root: &str,
) -> ResolutionPlan {
    let right = right.strip_prefix('/').unwrap_or(right);

    let mut bindings = vec![MountBinding::new(join(virtual_root, right), path)];
    let mut required = Vec::new();
    let mut audit_targets = vec![path.to_string()];

    let require_start = join(left, rule.match_key());
    for folder in rule.requires() {
        let require_path = join(&require_start, &folder);
        bindings.push(MountBinding::new(join(virtual_root, &folder), &require_path));
        required.push(MountRecord::standalone(require_path.clone()));
        audit_targets.push(require_path);
    }

    ResolutionPlan {
        kind: PlanKind::Rule {
            match_key: rule.match_key().to_string(),
        },
        bindings,
        sub_dirs: vec![path.to_string()],
        required,
        audit_targets,
    }
}

fn resolve_content_children(path: &str, virtual_root: &str) -> ResolutionPlan {
    let mut children: Vec<String> = match fs::read_dir(path) {
        Ok(entries) => entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect(),
        Err(e) => {
            warn!("Failed to list content folder {}: {}", path, e);
            Vec::new()
        }
    };
    children.sort();

    let mut bindings = Vec::with_capacity(children.len());
    let mut sub_dirs = Vec::with_capacity(children.len());
    for child in children {
        let real_path = join(path, &child);
        bindings.push(MountBinding::new(join(virtual_root, &child), &real_path));
        sub_dirs.push(real_path);
    }

    ResolutionPlan {
        kind: PlanKind::ContentChildren,
        bindings,
        sub_dirs,
        required: Vec::new(),
        audit_targets: vec![path.to_string()],
    }
}

fn resolve_single_folder(path: &str, virtual_root: &str) -> ResolutionPlan {
    ResolutionPlan {
        kind: PlanKind::SingleFolder,
        bindings: vec![MountBinding::new(join(virtual_root, base_name(path)), path)],
        sub_dirs: vec![path.to_string()],
        required: Vec::new(),
        audit_targets: vec![path.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::IniFile;
    use std::fs;

    const ROOT: &str = "/Game/";

    fn rules(lines: &[&str]) -> RuleStore {
        let mut text = String::from("[MountRule]\n");
        for line in lines {
            text.push_str(&format!("+Rule={}\n", line));
        }
        RuleStore::load(&IniFile::parse(&text))
    }

    #[test]
    fn test_single_folder_binding() {
        let plan = resolve("D:/External/Foo", &RuleStore::default(), ROOT);
        assert_eq!(plan.kind, PlanKind::SingleFolder);
        assert_eq!(
            plan.bindings,
            vec![MountBinding::new("/Game/Foo/", "D:/External/Foo")]
        );
        assert_eq!(plan.sub_dirs, vec!["D:/External/Foo"]);
        assert!(plan.required.is_empty());
    }

    #[test]
    fn test_first_rule_wins_over_more_specific() {
        let store = rules(&[r#"(SubDir="Art")"#, r#"(SubDir="Art/Sub")"#]);
        let plan = resolve("D:/Project/Art/Sub/Textures", &store, ROOT);
        assert_eq!(
            plan.kind,
            PlanKind::Rule {
                match_key: "Art".into()
            }
        );
        assert_eq!(plan.bindings[0].virtual_path, "/Game/Sub/Textures/");
    }

    #[test]
    fn test_rule_splits_at_rightmost_occurrence() {
        let store = rules(&[r#"(SubDir="Art",Requires="Core")"#]);
        let plan = resolve("C:/Art/Legacy/Art/Textures", &store, ROOT);
        assert_eq!(
            plan.bindings,
            vec![
                MountBinding::new("/Game/Textures/", "C:/Art/Legacy/Art/Textures"),
                MountBinding::new("/Game/Core/", "C:/Art/Legacy/Art/Core"),
            ]
        );
    }

    #[test]
    fn test_required_folders_become_standalone_records() {
        let store = rules(&[r#"(SubDir="Art",Requires="Core,Shared")"#]);
        let plan = resolve("D:/Project/Art/Characters", &store, ROOT);

        assert_eq!(plan.bindings.len(), 3);
        assert_eq!(plan.sub_dirs, vec!["D:/Project/Art/Characters"]);
        assert_eq!(
            plan.required,
            vec![
                MountRecord::standalone("D:/Project/Art/Core"),
                MountRecord::standalone("D:/Project/Art/Shared"),
            ]
        );
        assert_eq!(
            plan.audit_targets,
            vec![
                "D:/Project/Art/Characters",
                "D:/Project/Art/Core",
                "D:/Project/Art/Shared"
            ]
        );
    }

    #[test]
    fn test_rule_key_at_end_binds_namespace_root() {
        let store = rules(&[r#"(SubDir="Art")"#]);
        let plan = resolve("D:/Project/Art", &store, ROOT);
        assert_eq!(plan.bindings[0].virtual_path, "/Game/");
    }

    #[test]
    fn test_content_children_are_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("MyPack").join("Content");
        fs::create_dir_all(content.join("Meshes")).unwrap();
        fs::create_dir_all(content.join("Maps")).unwrap();
        fs::write(content.join("readme.txt"), "not a folder").unwrap();

        let content_path = content.to_string_lossy().replace('\\', "/");
        let plan = resolve(&content_path, &RuleStore::default(), ROOT);

        assert_eq!(plan.kind, PlanKind::ContentChildren);
        assert_eq!(
            plan.bindings,
            vec![
                MountBinding::new("/Game/Maps/", format!("{}/Maps", content_path)),
                MountBinding::new("/Game/Meshes/", format!("{}/Meshes", content_path)),
            ]
        );
        assert!(plan.bindings.iter().all(|b| b.virtual_path != "/Game/Content/"));
        assert_eq!(plan.audit_targets, vec![content_path]);
    }

    #[test]
    fn test_missing_content_folder_yields_nothing() {
        let plan = resolve("/no/such/place/Content", &RuleStore::default(), ROOT);
        assert_eq!(plan.kind, PlanKind::ContentChildren);
        assert!(plan.bindings.is_empty());
        assert!(plan.sub_dirs.is_empty());
    }
}
