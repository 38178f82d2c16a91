//! CSV decoding engine
//!
//! This module turns CSV rows into typed records. Decoding is all-or-nothing:
//! a call either returns one record per data row, in input order, or the
//! first error it hit with the row, column and raw row that caused it.
//!
//! ## Architecture
//!
//! The decoder is organized into logical components:
//! - [`reader`] - Decode call orchestration, header skip and row-length policy
//! - [`field_map`] - Column to field slot resolution (tagged or positional)
//! - [`coercion`] - Per-cell conversion into typed values
//! - [`stats`] - Counters reported by a successful call
//!
//! ## Usage
//!
//! ```rust
//! use csvscan::{csv_record, Reader, ReaderConfig};
//!
//! csv_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Reading {
//!         pub station: u32,
//!         pub temperature: f64,
//!         pub valid: bool,
//!     }
//! }
//!
//! let input = "station,temperature,valid\n1001,15.5,true\n1002,-3.25,F\n";
//! let reader = Reader::<Reading>::with_config(ReaderConfig::new().with_header_row_ignored());
//! let readings = reader.decode(input.as_bytes())?;
//!
//! assert_eq!(readings.len(), 2);
//! assert_eq!(readings[1].temperature, -3.25);
//! assert!(!readings[1].valid);
//! # Ok::<(), csvscan::Error>(())
//! ```

pub mod coercion;
pub mod field_map;
pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use coercion::coerce;
pub use field_map::{FieldMap, MapMode};
pub use reader::Reader;
pub use stats::DecodeStats;
