//! Test utilities and record fixtures for decoder testing
//!
//! This module provides record types and helper functions shared by the
//! decoder test modules.

use crate::schema::{FieldKind, IntWidth, RecordSchema};
use std::io::Write;
use tempfile::NamedTempFile;

mod field_map_tests;

crate::csv_record! {
    /// One field of every supported kind, mapped by position
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct AllKinds {
        pub a: bool,
        pub b: u8,
        pub c: u16,
        pub d: u32,
        pub e: u64,
        pub f: usize,
        pub g: i8,
        pub h: i16,
        pub i: i32,
        pub j: i64,
        pub k: isize,
        pub l: f32,
        pub m: f64,
        pub n: String,
    }
}

crate::csv_record! {
    /// Two tagged columns and one field that is never assigned
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Point {
        pub x: i64 => 0,
        pub y: i64 => 1,
        pub ignored: String,
    }
}

crate::csv_record! {
    /// Tags out of declaration order
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Reordered {
        pub last: String => 2,
        pub first: String => 0,
    }
}

crate::csv_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct NegativeTag {
        pub value: i32 => -1,
    }
}

crate::csv_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct DuplicateTag {
        pub early: String => 0,
        pub late: String => 0,
    }
}

crate::csv_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Flag {
        pub on: bool,
    }
}

/// A complete valid row for [`AllKinds`]
pub const ALL_KINDS_ROW: &str = "true,2,3,4,5,6,7,8,9,10,11,0.9,1.2,string";

/// The record [`ALL_KINDS_ROW`] decodes into
pub fn all_kinds_record() -> AllKinds {
    AllKinds {
        a: true,
        b: 2,
        c: 3,
        d: 4,
        e: 5,
        f: 6,
        g: 7,
        h: 8,
        i: 9,
        j: 10,
        k: 11,
        l: 0.9,
        m: 1.2,
        n: "string".to_string(),
    }
}

/// Positional schema with `count` text fields
pub fn text_schema(count: usize) -> RecordSchema {
    (0..count)
        .fold(RecordSchema::builder(), |builder, i| {
            builder.field(format!("field{}", i), FieldKind::Text)
        })
        .build()
}

/// Schema registered by type name, including one unsupported kind
pub fn schema_with_unsupported_kind() -> RecordSchema {
    RecordSchema::builder()
        .field("id", FieldKind::Unsigned(IntWidth::W32))
        .typed_field("tags", "Vec<String>")
        .build()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
