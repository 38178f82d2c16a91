//! Reader configuration and validation.
//!
//! Options recognised by a decode call. Settings can be built in code with
//! the `with_*` methods or loaded from a TOML file:
//!
//! ```toml
//! ignore_header_row = true
//! forced_row_length = 5
//! ignore_columns = [2, 4]
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Options for one [`Reader`](crate::Reader)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// Discard the first row before decoding
    pub ignore_header_row: bool,

    /// Reject rows whose cell count differs from this value (0 means no check)
    pub forced_row_length: Option<usize>,

    /// Columns to leave unassigned (positional schemas only)
    pub ignore_columns: BTreeSet<usize>,
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the first input row
    pub fn with_header_row_ignored(mut self) -> Self {
        self.ignore_header_row = true;
        self
    }

    /// Require every row to have exactly `length` cells
    pub fn with_forced_row_length(mut self, length: usize) -> Self {
        self.forced_row_length = Some(length);
        self
    }

    /// Skip the given columns in positional mode
    pub fn with_ignored_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.ignore_columns.extend(columns);
        self
    }

    /// Effective forced row length; `Some(0)` disables the check
    pub fn forced_row_length(&self) -> Option<usize> {
        self.forced_row_length.filter(|&length| length > 0)
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid reader config: {}", e)))
    }

    /// Load and parse a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded reader config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_methods() {
        let config = ReaderConfig::new()
            .with_header_row_ignored()
            .with_forced_row_length(3)
            .with_ignored_columns([2, 0, 2]);

        assert!(config.ignore_header_row);
        assert_eq!(config.forced_row_length, Some(3));
        assert_eq!(config.ignore_columns.iter().copied().collect::<Vec<_>>(), [0, 2]);
        assert_eq!(config.forced_row_length(), Some(3));
    }

    #[test]
    fn test_default_is_permissive() {
        let config = ReaderConfig::default();
        assert!(!config.ignore_header_row);
        assert_eq!(config.forced_row_length, None);
        assert!(config.ignore_columns.is_empty());
    }

    #[test]
    fn test_zero_row_length_disables_check() {
        let config = ReaderConfig::new().with_forced_row_length(0);
        assert_eq!(config.forced_row_length, Some(0));
        assert_eq!(config.forced_row_length(), None);

        let config = ReaderConfig::from_toml_str("forced_row_length = 0").unwrap();
        assert_eq!(config.forced_row_length(), None);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ReaderConfig::from_toml_str(
            "ignore_header_row = true\nforced_row_length = 5\nignore_columns = [1, 3]\n",
        )
        .unwrap();

        assert_eq!(
            config,
            ReaderConfig::new()
                .with_header_row_ignored()
                .with_forced_row_length(5)
                .with_ignored_columns([1, 3])
        );
    }

    #[test]
    fn test_from_toml_str_partial_uses_defaults() {
        let config = ReaderConfig::from_toml_str("forced_row_length = 2").unwrap();
        assert!(!config.ignore_header_row);
        assert_eq!(config.forced_row_length, Some(2));
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_keys() {
        let result = ReaderConfig::from_toml_str("delimiter = \";\"");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ignore_header_row = true").unwrap();

        let config = ReaderConfig::from_toml_file(file.path()).unwrap();
        assert!(config.ignore_header_row);
    }

    #[test]
    fn test_from_missing_toml_file() {
        let result = ReaderConfig::from_toml_file(Path::new("/nonexistent/csvscan.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
