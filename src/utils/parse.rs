//! Field extraction
//!
//! Reads `Key="value"` / `Key=value` fields out of the parenthesised entries
//! stored in ini values, e.g. `(SubDir="Art",Requires="Core,Shared")`.

/// Extracts the value that follows `key` (which includes the trailing `=`).
///
/// The key is matched case-insensitively and only at the start of the text or
/// right after a `(`, `,` or whitespace, so `SubDir=` never matches inside
/// `XSubDir=`. A quoted value runs to the closing quote; a bare value runs to
/// the next `,`, `)` or whitespace.
pub fn parse_value(text: &str, key: &str) -> Option<String> {
    let lower_text = text.to_ascii_lowercase();
    let lower_key = key.to_ascii_lowercase();

    let mut from = 0;
    while let Some(found) = lower_text[from..].find(&lower_key) {
        let start = from + found;
        let at_boundary = start == 0
            || matches!(
                text[..start].chars().next_back(),
                Some('(' | ',' | ' ' | '\t')
            );

        if at_boundary {
            let rest = &text[start + key.len()..];
            return Some(match rest.strip_prefix('"') {
                Some(quoted) => match quoted.find('"') {
                    Some(end) => quoted[..end].to_string(),
                    None => quoted.to_string(),
                },
                None => rest
                    .split([',', ')', ' ', '\t'])
                    .next()
                    .unwrap_or("")
                    .to_string(),
            });
        }
        from = start + lower_key.len();
    }
    None
}

/// Splits a comma separated list, dropping empty items.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a comma separated list of paths, dropping empty items only.
///
/// Items keep their surrounding whitespace, which is significant in a path.
pub fn split_paths(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
