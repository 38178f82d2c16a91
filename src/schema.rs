//! Record schema definitions.
//!
//! A [`RecordSchema`] is the ordered list of fields a record type exposes to
//! the decoder. Each [`FieldDescriptor`] carries the field's name, its
//! primitive [`FieldKind`] and an optional column tag. Tags are kept as the
//! raw text the record declared; they are validated when the decoder
//! resolves its field map, so a bad tag surfaces as a schema error rather
//! than a panic at declaration time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit width of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    /// Native pointer width (`usize` / `isize`)
    Platform,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
            IntWidth::Platform => usize::BITS,
        }
    }
}

/// Bit width of a floating point field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatWidth {
    W32,
    W64,
}

/// Primitive kind of a record field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Bool,
    Unsigned(IntWidth),
    Signed(IntWidth),
    Float(FloatWidth),
    Text,
    /// A registered kind the decoder cannot fill, kept by type name
    Unsupported(String),
}

impl FieldKind {
    /// Map a Rust type name onto a field kind.
    ///
    /// Unknown names are preserved as [`FieldKind::Unsupported`] so that the
    /// decoder can report them against the field that declared them.
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name.trim() {
            "bool" => FieldKind::Bool,
            "u8" => FieldKind::Unsigned(IntWidth::W8),
            "u16" => FieldKind::Unsigned(IntWidth::W16),
            "u32" => FieldKind::Unsigned(IntWidth::W32),
            "u64" => FieldKind::Unsigned(IntWidth::W64),
            "usize" => FieldKind::Unsigned(IntWidth::Platform),
            "i8" => FieldKind::Signed(IntWidth::W8),
            "i16" => FieldKind::Signed(IntWidth::W16),
            "i32" => FieldKind::Signed(IntWidth::W32),
            "i64" => FieldKind::Signed(IntWidth::W64),
            "isize" => FieldKind::Signed(IntWidth::Platform),
            "f32" => FieldKind::Float(FloatWidth::W32),
            "f64" => FieldKind::Float(FloatWidth::W64),
            "String" => FieldKind::Text,
            other => FieldKind::Unsupported(other.to_string()),
        }
    }

    /// The Rust type name this kind decodes into
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Unsigned(IntWidth::W8) => "u8",
            FieldKind::Unsigned(IntWidth::W16) => "u16",
            FieldKind::Unsigned(IntWidth::W32) => "u32",
            FieldKind::Unsigned(IntWidth::W64) => "u64",
            FieldKind::Unsigned(IntWidth::Platform) => "usize",
            FieldKind::Signed(IntWidth::W8) => "i8",
            FieldKind::Signed(IntWidth::W16) => "i16",
            FieldKind::Signed(IntWidth::W32) => "i32",
            FieldKind::Signed(IntWidth::W64) => "i64",
            FieldKind::Signed(IntWidth::Platform) => "isize",
            FieldKind::Float(FloatWidth::W32) => "f32",
            FieldKind::Float(FloatWidth::W64) => "f64",
            FieldKind::Text => "String",
            FieldKind::Unsupported(type_name) => type_name.as_str(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Conversion of a declared column tag into its raw text form.
///
/// Implemented for string and integer literals so that `csv_record!` can
/// accept either `field: u8 => "3"` or `field: u8 => 3`.
pub trait IntoColumnTag {
    fn into_column_tag(self) -> String;
}

impl IntoColumnTag for &str {
    fn into_column_tag(self) -> String {
        self.to_string()
    }
}

impl IntoColumnTag for String {
    fn into_column_tag(self) -> String {
        self
    }
}

macro_rules! impl_integer_column_tag {
    ($($ty:ty),*) => {
        $(
            impl IntoColumnTag for $ty {
                fn into_column_tag(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_column_tag!(i32, i64, isize, u32, u64, usize);

/// One field of a record schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    column_tag: Option<String>,
}

impl FieldDescriptor {
    /// Create an untagged field
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            column_tag: None,
        }
    }

    /// Attach a column tag to this field
    pub fn with_tag(mut self, tag: impl IntoColumnTag) -> Self {
        self.column_tag = Some(tag.into_column_tag());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Raw, unvalidated column tag
    pub fn column_tag(&self) -> Option<&str> {
        self.column_tag.as_deref()
    }

    pub fn is_tagged(&self) -> bool {
        self.column_tag.is_some()
    }
}

/// Ordered field list describing one decodable record type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn builder() -> RecordSchemaBuilder {
        RecordSchemaBuilder::default()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Field at the given slot
    pub fn field(&self, slot: usize) -> Option<&FieldDescriptor> {
        self.fields.get(slot)
    }

    /// Slot of the first field with the given name
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any field declares a column tag
    pub fn is_tagged(&self) -> bool {
        self.fields.iter().any(FieldDescriptor::is_tagged)
    }
}

/// Registration-style construction of a [`RecordSchema`]
#[derive(Debug, Clone, Default)]
pub struct RecordSchemaBuilder {
    fields: Vec<FieldDescriptor>,
}

impl RecordSchemaBuilder {
    /// Add an untagged field
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor::new(name, kind));
        self
    }

    /// Add a field read from the given column
    pub fn tagged_field(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        tag: impl IntoColumnTag,
    ) -> Self {
        self.fields.push(FieldDescriptor::new(name, kind).with_tag(tag));
        self
    }

    /// Add a field whose kind is given by a Rust type name such as `"u16"`
    pub fn typed_field(self, name: impl Into<String>, type_name: &str) -> Self {
        self.field(name, FieldKind::from_type_name(type_name))
    }

    pub fn build(self) -> RecordSchema {
        RecordSchema::new(self.fields)
    }
}
