//! Shared helpers
//!
//! Path manipulation and `Key="value"` field extraction used across the crate.

pub mod parse;
pub mod paths;

pub use parse::{parse_list, parse_value, split_paths};
pub use paths::{base_name, contains_ignore_case, join, normalize_dir, rsplit_ignore_case};
