//! Path helpers
//!
//! Mount paths are plain `/`-separated strings: virtual paths are not real
//! filesystem paths and real paths may carry a drive (`D:/`) or UNC (`//host`)
//! prefix that must survive untouched on every platform.

/// Joins two path fragments with exactly one `/` between them.
pub fn join(left: &str, right: &str) -> String {
    if right.is_empty() {
        return left.to_string();
    }
    if left.is_empty() {
        return right.to_string();
    }
    match (left.ends_with('/'), right.starts_with('/')) {
        (true, true) => format!("{}{}", left, &right[1..]),
        (false, false) => format!("{}/{}", left, right),
        _ => format!("{}{}", left, right),
    }
}

/// Converts `\` separators to `/` and drops trailing separators.
///
/// A bare root such as `/` or `//` is left as is.
pub fn normalize_dir(path: &str) -> String {
    let unified = path.trim().replace('\\', "/");
    let trimmed = unified.trim_end_matches('/');
    if trimmed.is_empty() {
        unified
    } else {
        trimmed.to_string()
    }
}

/// Last path segment without its extension (`D:/Packs/Foo.v2` gives `Foo`).
pub fn base_name(path: &str) -> &str {
    let name = path
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("");
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

/// Case-insensitive (ASCII) substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Splits `text` around the rightmost case-insensitive occurrence of `delim`.
///
/// The delimiter itself belongs to neither half.
pub fn rsplit_ignore_case<'a>(text: &'a str, delim: &str) -> Option<(&'a str, &'a str)> {
    if delim.is_empty() {
        return None;
    }
    let at = text
        .to_ascii_lowercase()
        .rfind(&delim.to_ascii_lowercase())?;
    Some((&text[..at], &text[at + delim.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("/Game/", "Foo"), "/Game/Foo");
        assert_eq!(join("/Game", "Foo"), "/Game/Foo");
        assert_eq!(join("/Game/", "/Foo"), "/Game/Foo");
        assert_eq!(join("/Game/", ""), "/Game/");
        assert_eq!(join("", "Foo"), "Foo");
    }

    #[test]
    fn test_normalize_dir() {
        assert_eq!(normalize_dir("D:\\Proj\\Art\\"), "D:/Proj/Art");
        assert_eq!(normalize_dir("/srv/assets/"), "/srv/assets");
        assert_eq!(normalize_dir("/"), "/");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("D:/External/Foo"), "Foo");
        assert_eq!(base_name("D:/External/Foo/"), "Foo");
        assert_eq!(base_name("D:/Packs/MyPack/Content"), "Content");
        assert_eq!(base_name("D:/Packs/Foo.v2"), "Foo");
        assert_eq!(base_name("/srv/.hidden"), ".hidden");
    }

    #[test]
    fn test_rsplit_uses_last_occurrence() {
        let (left, right) = rsplit_ignore_case("C:/Art/Legacy/Art/Textures", "art").unwrap();
        assert_eq!(left, "C:/Art/Legacy/");
        assert_eq!(right, "/Textures");
        assert!(rsplit_ignore_case("C:/Foo", "Art").is_none());
    }
}
