//! Module `entry`
//!
//! A single path rewrite rule.

use crate::utils::{contains_ignore_case, parse_list, parse_value};

/// One `MountRule/Rule` entry.
///
/// `match_key` is the `SubDir=` field; `raw_entry` keeps the whole entry text
/// (outer parentheses stripped) so optional fields are read on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    match_key: String,
    raw_entry: String,
}

impl RuleEntry {
    pub fn new(match_key: impl Into<String>, raw_entry: impl Into<String>) -> Self {
        Self {
            match_key: match_key.into(),
            raw_entry: raw_entry.into(),
        }
    }

    /// Parses a config value such as `(SubDir="Art",Requires="Core")`.
    ///
    /// Returns `None` when the entry has no `SubDir=` field.
    pub fn parse(value: &str) -> Option<Self> {
        let entry = value.trim();
        let entry = entry.strip_prefix('(').unwrap_or(entry);
        let entry = entry.strip_suffix(')').unwrap_or(entry);

        let match_key = parse_value(entry, "SubDir=")?;
        if match_key.is_empty() {
            return None;
        }
        Some(Self::new(match_key, entry))
    }

    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    pub fn raw_entry(&self) -> &str {
        &self.raw_entry
    }

    /// Sibling folders that must be mounted alongside any path this rule matches.
    pub fn requires(&self) -> Vec<String> {
        parse_value(&self.raw_entry, "Requires=")
            .map(|list| parse_list(&list))
            .unwrap_or_default()
    }

    pub fn matches(&self, path: &str) -> bool {
        contains_ignore_case(path, &self.match_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_requires() {
        let rule = RuleEntry::parse(r#"(SubDir="Art",Requires="Core,Shared")"#).unwrap();
        assert_eq!(rule.match_key(), "Art");
        assert_eq!(rule.raw_entry(), r#"SubDir="Art",Requires="Core,Shared""#);
        assert_eq!(rule.requires(), vec!["Core", "Shared"]);
    }

    #[test]
    fn test_parse_without_requires() {
        let rule = RuleEntry::parse(r#"(SubDir="Audio")"#).unwrap();
        assert!(rule.requires().is_empty());
    }

    #[test]
    fn test_missing_subdir_is_rejected() {
        assert!(RuleEntry::parse(r#"(Requires="Core")"#).is_none());
        assert!(RuleEntry::parse(r#"(SubDir="")"#).is_none());
        assert!(RuleEntry::parse("garbage").is_none());
    }

    #[test]
    fn test_matches_ignores_case() {
        let rule = RuleEntry::new("Art", "SubDir=\"Art\"");
        assert!(rule.matches("D:/Project/art/Textures"));
        assert!(!rule.matches("D:/Project/Audio"));
    }
}
