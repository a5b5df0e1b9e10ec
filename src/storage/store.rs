//! Module `store`
//!
//! Defines the `ConfigStore` trait: sectioned key/value configuration with
//! array-valued keys and an explicit flush to disk.

use crate::error::StorageError;

/// Sectioned configuration with array-valued keys.
///
/// Section and key names are matched case-insensitively. Values are returned
/// verbatim, quotes and parentheses included.
pub trait ConfigStore: Send {
    /// All values stored under `section`/`key`, in file order.
    fn get_array(&self, section: &str, key: &str) -> Vec<String>;

    /// Replaces every value of `section`/`key` with `values`.
    fn set_array(&mut self, section: &str, key: &str, values: &[String]);

    /// Every `(key, value)` pair of `section`, in file order.
    fn section_entries(&self, section: &str) -> Vec<(String, String)>;

    /// Writes pending changes to the backing file.
    fn flush(&mut self) -> Result<(), StorageError>;
}
