//! csvscan
//!
//! Decode CSV rows into statically-typed Rust records.
//!
//! This library provides tools for:
//! - Declaring decodable record types with the [`csv_record!`] macro
//! - Mapping columns to fields by explicit column tags or by position
//! - Coercing cells into exact-width integers, floats, booleans and text
//! - Reporting the first failure with its row, column and raw row
//! - Guessing a record declaration from sample rows (used by the CLI)

pub mod codegen;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod inference;
pub mod record;
pub mod schema;
pub mod value;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ReaderConfig;
pub use decoder::{DecodeStats, FieldMap, MapMode, Reader};
pub use error::{
    AssignError, CoercionError, Error, ErrorKind, ParseCause, ParseError, Result, SchemaError,
};
pub use record::{CsvRecord, DynamicRecord};
pub use schema::{FieldDescriptor, FieldKind, FloatWidth, IntWidth, RecordSchema};
pub use value::{FieldType, Value};
