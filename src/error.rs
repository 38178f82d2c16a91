//! Error handling for csvscan decoding operations.
//!
//! Failures fall into three families: schema errors raised while the field
//! map is being resolved, row errors raised when a row has the wrong shape,
//! and coercion errors raised when a single cell cannot be parsed as its
//! field's kind. Row and coercion failures are wrapped in a [`ParseError`]
//! which pins them to a row, a column and a snapshot of the raw row.

use crate::schema::FieldKind;
use std::error::Error as _;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// Result type alias for csvscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a decode call can return
#[derive(Error, Debug)]
pub enum Error {
    /// The record schema could not be turned into a field map
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A row or one of its cells failed to decode
    #[error(transparent)]
    Parse(#[from] Box<ParseError>),

    /// Header skipping was requested but the input had no rows at all
    #[error("Expected a header row but the input was empty")]
    MissingHeader,

    /// The CSV tokenizer rejected the input
    #[error("CSV read error at row {row}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Reader configuration is invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of an [`Error`], for callers that only need to
/// branch on the failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Schema,
    RowLength,
    Coercion,
    Input,
    Io,
    Configuration,
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a tokenizer failure seen while reading the given data row
    pub fn csv(row: usize, source: csv::Error) -> Self {
        Self::Csv { row, source }
    }

    /// Create a positional parse error from a raw CSV record
    pub fn parse(
        row: usize,
        column: usize,
        raw_row: &csv::StringRecord,
        cause: impl Into<ParseCause>,
    ) -> Self {
        Self::Parse(Box::new(ParseError {
            row,
            column,
            raw_row: raw_row.iter().map(str::to_owned).collect(),
            cause: cause.into(),
        }))
    }

    /// Which failure family this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Schema(_) => ErrorKind::Schema,
            Self::Parse(parse) => match &parse.cause {
                ParseCause::RowLength { .. } => ErrorKind::RowLength,
                ParseCause::Coercion(_) => ErrorKind::Coercion,
                ParseCause::Schema(_) | ParseCause::Assign(_) => ErrorKind::Schema,
            },
            Self::MissingHeader => ErrorKind::Input,
            Self::Csv { source, .. } if source.is_io_error() => ErrorKind::Io,
            Self::Csv { .. } => ErrorKind::Input,
            Self::Io { .. } => ErrorKind::Io,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// 1-based data row the failure is attributed to, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Parse(parse) => Some(parse.row),
            Self::Csv { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// 0-based column the failure is attributed to, if any
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Parse(parse) => Some(parse.column),
            _ => None,
        }
    }

    /// Snapshot of the offending row, if any
    pub fn raw_row(&self) -> Option<&[String]> {
        match self {
            Self::Parse(parse) => Some(&parse.raw_row),
            _ => None,
        }
    }

    /// The parse error payload, if this is a row or cell failure
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(parse) => Some(parse),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(Box::new(error))
    }
}

/// A failure pinned to a position in the input.
///
/// `row` counts data rows only (a skipped header is not counted) and starts
/// at 1. `column` is the raw 0-based index within the row, or 0 when the
/// whole row is at fault.
///
/// The message includes the cause and the raw row, so `source()` skips the
/// cause and yields its underlying parser error, if any.
#[derive(Debug)]
pub struct ParseError {
    pub row: usize,
    pub column: usize,
    pub raw_row: Vec<String>,
    pub cause: ParseCause,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {}, column {}: {}\nRaw row: {:?}",
            self.row, self.column, self.cause, self.raw_row
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.source()
    }
}

/// What went wrong at a [`ParseError`]'s position
#[derive(Error, Debug)]
pub enum ParseCause {
    #[error("enforced row length is {expected} but got {actual}")]
    RowLength { expected: usize, actual: usize },

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Assign(#[from] AssignError),
}

/// Construction-time failures, raised before any row is consumed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("invalid column tag for field '{field}': '{tag}'")]
    InvalidColumnTag {
        field: String,
        tag: String,
        #[source]
        source: ParseIntError,
    },

    #[error("negative column index for field '{field}': {tag}")]
    NegativeColumnIndex { field: String, tag: String },

    #[error("column index out of range: {index} (schema has {field_count} fields)")]
    ColumnOutOfRange { index: usize, field_count: usize },

    #[error("no columns can be mapped onto the schema")]
    NoMapping,

    #[error("unsupported kind '{type_name}' for field '{field}'")]
    UnsupportedKind { field: String, type_name: String },
}

/// A cell could not be parsed as its field's declared kind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("invalid boolean literal '{value}'")]
    Bool {
        value: String,
        #[source]
        source: ParseBoolError,
    },

    #[error("invalid {kind} value '{value}'")]
    Integer {
        kind: FieldKind,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {kind} value '{value}': sign not allowed")]
    UnexpectedSign { kind: FieldKind, value: String },

    #[error("invalid {kind} value '{value}'")]
    Float {
        kind: FieldKind,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{kind} value '{value}' is out of range")]
    FloatOverflow { kind: FieldKind, value: String },
}

/// A record rejected a coerced value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("expected a {expected} value but got {found}")]
    KindMismatch { expected: FieldKind, found: FieldKind },

    #[error("record has no field at slot {0}")]
    NoSuchSlot(usize),
}
