//! Cell coercion into typed values
//!
//! This module converts one raw CSV cell into one [`Value`] according to the
//! field's declared kind. Integer kinds parse directly into their exact
//! width, so overflow is reported by the standard library parser rather
//! than by a range check after the fact.

use crate::error::{CoercionError, ParseCause, SchemaError};
use crate::schema::{FieldDescriptor, FieldKind, FloatWidth, IntWidth};
use crate::value::Value;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

/// Coerce a single cell into a value for the given field
pub fn coerce(field: &FieldDescriptor, cell: &str) -> Result<Value, ParseCause> {
    let value = match field.kind() {
        FieldKind::Bool => parse_bool(cell)
            .map(Value::Bool)
            .map_err(|source| CoercionError::Bool {
                value: cell.to_string(),
                source,
            })?,
        FieldKind::Unsigned(width) => parse_unsigned(*width, cell)?,
        FieldKind::Signed(width) => parse_signed(*width, cell)?,
        FieldKind::Float(width) => parse_float(*width, cell)?,
        FieldKind::Text => Value::Text(cell.to_string()),
        FieldKind::Unsupported(type_name) => {
            return Err(SchemaError::UnsupportedKind {
                field: field.name().to_string(),
                type_name: type_name.clone(),
            }
            .into());
        }
    };

    Ok(value)
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(cell: &str) -> Result<bool, ParseBoolError> {
    match cell {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        // never a valid literal here; yields the std error for the cell
        other => other.parse::<bool>(),
    }
}

/// Parse a base-10 unsigned integer of the given width.
///
/// Only digits are accepted; a leading `+` is rejected even though the
/// standard library parser would strip it.
pub fn parse_unsigned(width: IntWidth, cell: &str) -> Result<Value, CoercionError> {
    let kind = FieldKind::Unsigned(width);
    if cell.starts_with('+') {
        return Err(CoercionError::UnexpectedSign {
            kind,
            value: cell.to_string(),
        });
    }

    let parsed = match width {
        IntWidth::W8 => cell.parse().map(Value::U8),
        IntWidth::W16 => cell.parse().map(Value::U16),
        IntWidth::W32 => cell.parse().map(Value::U32),
        IntWidth::W64 => cell.parse().map(Value::U64),
        IntWidth::Platform => cell.parse().map(Value::Usize),
    };
    parsed.map_err(|source| integer_error(kind, cell, source))
}

/// Parse a base-10 signed integer of the given width
pub fn parse_signed(width: IntWidth, cell: &str) -> Result<Value, CoercionError> {
    let parsed = match width {
        IntWidth::W8 => cell.parse().map(Value::I8),
        IntWidth::W16 => cell.parse().map(Value::I16),
        IntWidth::W32 => cell.parse().map(Value::I32),
        IntWidth::W64 => cell.parse().map(Value::I64),
        IntWidth::Platform => cell.parse().map(Value::Isize),
    };
    parsed.map_err(|source| integer_error(FieldKind::Signed(width), cell, source))
}

/// Parse a decimal or exponential float at the given precision.
///
/// Finite text that only fits the width as an infinity is out of range.
/// Explicit `inf` / `infinity` literals are kept.
pub fn parse_float(width: FloatWidth, cell: &str) -> Result<Value, CoercionError> {
    let kind = FieldKind::Float(width);
    let float_error = |source: ParseFloatError| CoercionError::Float {
        kind: kind.clone(),
        value: cell.to_string(),
        source,
    };

    let (value, finite) = match width {
        FloatWidth::W32 => {
            let v: f32 = cell.parse().map_err(float_error)?;
            (Value::F32(v), !v.is_infinite())
        }
        FloatWidth::W64 => {
            let v: f64 = cell.parse().map_err(float_error)?;
            (Value::F64(v), !v.is_infinite())
        }
    };

    if !finite && !is_infinity_literal(cell) {
        return Err(CoercionError::FloatOverflow {
            kind,
            value: cell.to_string(),
        });
    }
    Ok(value)
}

fn is_infinity_literal(cell: &str) -> bool {
    let unsigned = cell.strip_prefix(['+', '-']).unwrap_or(cell);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn integer_error(kind: FieldKind, cell: &str, source: ParseIntError) -> CoercionError {
    CoercionError::Integer {
        kind,
        value: cell.to_string(),
        source,
    }
}
