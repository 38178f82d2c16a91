//! Typed cell values and the mapping between Rust field types and
//! [`FieldKind`]s.

use crate::error::AssignError;
use crate::schema::{FieldKind, FloatWidth, IntWidth};
use std::fmt;

/// One coerced cell
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    F32(f32),
    F64(f64),
    Text(String),
}

impl Value {
    /// Kind of field this value fills
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Bool(_) => FieldKind::Bool,
            Value::U8(_) => FieldKind::Unsigned(IntWidth::W8),
            Value::U16(_) => FieldKind::Unsigned(IntWidth::W16),
            Value::U32(_) => FieldKind::Unsigned(IntWidth::W32),
            Value::U64(_) => FieldKind::Unsigned(IntWidth::W64),
            Value::Usize(_) => FieldKind::Unsigned(IntWidth::Platform),
            Value::I8(_) => FieldKind::Signed(IntWidth::W8),
            Value::I16(_) => FieldKind::Signed(IntWidth::W16),
            Value::I32(_) => FieldKind::Signed(IntWidth::W32),
            Value::I64(_) => FieldKind::Signed(IntWidth::W64),
            Value::Isize(_) => FieldKind::Signed(IntWidth::Platform),
            Value::F32(_) => FieldKind::Float(FloatWidth::W32),
            Value::F64(_) => FieldKind::Float(FloatWidth::W64),
            Value::Text(_) => FieldKind::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed integers of any width, widened to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(v) => Some(i64::from(*v)),
            Value::I16(v) => Some(i64::from(*v)),
            Value::I32(v) => Some(i64::from(*v)),
            Value::I64(v) => Some(*v),
            Value::Isize(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Unsigned integers of any width, widened to `u64`
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(v) => Some(u64::from(*v)),
            Value::U16(v) => Some(u64::from(*v)),
            Value::U32(v) => Some(u64::from(*v)),
            Value::U64(v) => Some(*v),
            Value::Usize(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Isize(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// A Rust type that can be a decodable record field
pub trait FieldType: Sized {
    /// Kind the decoder coerces cells into for this type
    const KIND: FieldKind;

    /// Take a coerced value, rejecting values of another kind
    fn from_value(value: Value) -> Result<Self, AssignError>;
}

macro_rules! impl_field_type {
    ($($ty:ty => $variant:ident, $kind:expr;)*) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = $kind;

                fn from_value(value: Value) -> Result<Self, AssignError> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(AssignError::KindMismatch {
                            expected: Self::KIND,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_field_type! {
    bool => Bool, FieldKind::Bool;
    u8 => U8, FieldKind::Unsigned(IntWidth::W8);
    u16 => U16, FieldKind::Unsigned(IntWidth::W16);
    u32 => U32, FieldKind::Unsigned(IntWidth::W32);
    u64 => U64, FieldKind::Unsigned(IntWidth::W64);
    usize => Usize, FieldKind::Unsigned(IntWidth::Platform);
    i8 => I8, FieldKind::Signed(IntWidth::W8);
    i16 => I16, FieldKind::Signed(IntWidth::W16);
    i32 => I32, FieldKind::Signed(IntWidth::W32);
    i64 => I64, FieldKind::Signed(IntWidth::W64);
    isize => Isize, FieldKind::Signed(IntWidth::Platform);
    f32 => F32, FieldKind::Float(FloatWidth::W32);
    f64 => F64, FieldKind::Float(FloatWidth::W64);
    String => Text, FieldKind::Text;
}
