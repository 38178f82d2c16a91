//! Decode statistics
//!
//! Counters collected over one successful decode call.

use serde::{Deserialize, Serialize};

/// Summary of a successful decode call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStats {
    /// Whether a header row was read and discarded
    pub header_skipped: bool,

    /// Data rows read after any header skip
    pub rows_read: usize,

    /// Records produced; always equal to `rows_read` on success
    pub records_decoded: usize,

    /// Number of columns the field map assigned
    pub mapped_columns: usize,
}

impl DecodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Decoded {} records from {} rows ({} mapped columns{})",
            self.records_decoded,
            self.rows_read,
            self.mapped_columns,
            if self.header_skipped {
                ", header skipped"
            } else {
                ""
            }
        )
    }
}
