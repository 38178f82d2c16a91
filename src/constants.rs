//! Application constants for csvscan
//!
//! Default values and fixed tables used by schema inference, declaration
//! rendering and the CLI.

// =============================================================================
// Schema Inference
// =============================================================================

/// Rows sampled when the input starts with a header row (header + one data row)
pub const SAMPLE_ROWS_WITH_HEADER: usize = 2;

/// Rows sampled when the input has no header row
pub const SAMPLE_ROWS_WITHOUT_HEADER: usize = 1;

/// Prefix for generated field names when no header is available
pub const GENERIC_FIELD_PREFIX: &str = "field";

/// Prefix applied to header names that cannot start a Rust identifier
pub const LEADING_DIGIT_PREFIX: &str = "field_";

// =============================================================================
// Declaration Rendering
// =============================================================================

/// Record type name used when none is given
pub const DEFAULT_RECORD_NAME: &str = "Record";

/// Derives emitted on generated record declarations
pub const GENERATED_DERIVES: &[&str] = &["Debug", "Default", "Clone", "PartialEq"];

/// Indentation unit for rendered source
pub const INDENT: &str = "    ";

/// Rust keywords that cannot be used as plain field names
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "yield",
];

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used for the default log filter
pub const LOG_TARGET: &str = "csvscan";
