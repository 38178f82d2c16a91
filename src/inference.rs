//! Schema inference from sample rows
//!
//! This module guesses a record schema from the first rows of a CSV input:
//! field names come from the header row (or are generated), and each
//! column's kind is guessed from a single data row. The guess is a
//! heuristic for bootstrapping a record declaration; nothing in the decoder
//! depends on it.

use crate::constants::{
    GENERIC_FIELD_PREFIX, LEADING_DIGIT_PREFIX, RUST_KEYWORDS, SAMPLE_ROWS_WITH_HEADER,
    SAMPLE_ROWS_WITHOUT_HEADER,
};
use crate::decoder::coercion::{parse_bool, parse_float};
use crate::schema::{FieldDescriptor, FieldKind, FloatWidth, IntWidth, RecordSchema};
use crate::{Error, Result};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Primitive kind guessed for a sample cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InferredKind {
    Bool,
    Integer,
    Float,
    Text,
}

impl InferredKind {
    /// Field kind used when decoding a column of this kind
    pub fn field_kind(self) -> FieldKind {
        match self {
            InferredKind::Bool => FieldKind::Bool,
            InferredKind::Integer => FieldKind::Signed(IntWidth::W64),
            InferredKind::Float => FieldKind::Float(FloatWidth::W64),
            InferredKind::Text => FieldKind::Text,
        }
    }

    /// Rust type name emitted in generated declarations
    pub fn label(self) -> &'static str {
        match self {
            InferredKind::Bool => "bool",
            InferredKind::Integer => "i64",
            InferredKind::Float => "f64",
            InferredKind::Text => "String",
        }
    }
}

impl fmt::Display for InferredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guess the kind of one cell: boolean, then integer, then float, else text
pub fn infer_kind(cell: &str) -> InferredKind {
    if parse_bool(cell).is_ok() {
        InferredKind::Bool
    } else if cell.parse::<i64>().is_ok() {
        InferredKind::Integer
    } else if parse_float(FloatWidth::W64, cell).is_ok() {
        InferredKind::Float
    } else {
        InferredKind::Text
    }
}

/// Guess the kind of every cell in a row
pub fn infer_kinds<S: AsRef<str>>(row: &[S]) -> Vec<InferredKind> {
    row.iter().map(|cell| infer_kind(cell.as_ref())).collect()
}

/// Placeholder names `field0..fieldN` for inputs without a header
pub fn generic_field_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}{}", GENERIC_FIELD_PREFIX, i))
        .collect()
}

/// Turn a header cell into a snake_case Rust identifier.
///
/// Returns `None` when the header has no ASCII letters or digits.
pub fn to_field_name(header: &str) -> Option<String> {
    let mut name = String::with_capacity(header.len());
    let mut previous: Option<char> = None;

    for c in header.trim().chars() {
        if c.is_ascii_alphanumeric() {
            let after_lower = previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            if c.is_ascii_uppercase() && after_lower {
                name.push('_');
            }
            name.push(c.to_ascii_lowercase());
        } else if !name.is_empty() && !name.ends_with('_') {
            name.push('_');
        }
        previous = Some(c);
    }

    let name = name.trim_end_matches('_');
    if name.is_empty() {
        return None;
    }

    let mut name = if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", LEADING_DIGIT_PREFIX, name)
    } else {
        name.to_string()
    };
    if RUST_KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    Some(name)
}

/// Field names for a header row, with duplicates and blanks made unique
pub fn field_names_from_header<S: AsRef<str>>(header: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();

    header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let base = to_field_name(cell.as_ref())
                .unwrap_or_else(|| format!("{}{}", GENERIC_FIELD_PREFIX, i));
            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.clone()) {
                name = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            name
        })
        .collect()
}

/// One guessed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredField {
    pub name: String,
    pub kind: InferredKind,
}

/// Schema information guessed from sample rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaInfo {
    /// Fields in column order
    pub fields: Vec<InferredField>,
    /// Whether field names came from a header row
    pub has_header: bool,
}

impl SchemaInfo {
    /// Build from an optional header row and one data row
    pub fn from_rows(header: Option<&[String]>, data: &[String]) -> Self {
        let names = match header {
            Some(header) => field_names_from_header(header),
            None => generic_field_names(data.len()),
        };
        let kinds = infer_kinds(data);

        // Header and data widths can disagree; columns without a sample are text
        let fields = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| InferredField {
                name,
                kind: kinds.get(i).copied().unwrap_or(InferredKind::Text),
            })
            .collect();

        Self {
            fields,
            has_header: header.is_some(),
        }
    }

    /// Positional schema for decoding the sampled input
    pub fn to_record_schema(&self) -> RecordSchema {
        RecordSchema::new(
            self.fields
                .iter()
                .map(|field| FieldDescriptor::new(field.name.clone(), field.kind.field_kind()))
                .collect(),
        )
    }

    /// `(field name, type label)` pairs for declaration rendering
    pub fn declaration_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.kind.label().to_string()))
            .collect()
    }

    /// Summary statistics for logging
    pub fn summary(&self) -> String {
        let count = |kind: InferredKind| self.fields.iter().filter(|f| f.kind == kind).count();
        format!(
            "Inferred {} fields ({} bool, {} integer, {} float, {} text){}",
            self.fields.len(),
            count(InferredKind::Bool),
            count(InferredKind::Integer),
            count(InferredKind::Float),
            count(InferredKind::Text),
            if self.has_header {
                " from header"
            } else {
                ""
            }
        )
    }
}

/// Read up to `count` rows from a CSV input
pub fn sample_rows<R: Read>(input: R, count: usize) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::with_capacity(count);
    for (i, result) in csv_reader.records().take(count).enumerate() {
        let record = result.map_err(|e| Error::csv(i + 1, e))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Guess a schema from the first rows of a CSV input
pub fn infer_schema<R: Read>(input: R, has_header: bool) -> Result<SchemaInfo> {
    let wanted = if has_header {
        SAMPLE_ROWS_WITH_HEADER
    } else {
        SAMPLE_ROWS_WITHOUT_HEADER
    };

    let rows = sample_rows(input, wanted)?;
    debug!("Sampled {} of {} requested rows", rows.len(), wanted);

    let schema_info = match (has_header, rows.as_slice()) {
        (true, [header, data, ..]) => SchemaInfo::from_rows(Some(header.as_slice()), data),
        (false, [data, ..]) => SchemaInfo::from_rows(None, data),
        _ => {
            return Err(Error::configuration(format!(
                "Need {} sample row(s) to infer a schema but the input has {}",
                wanted,
                rows.len()
            )));
        }
    };

    info!("Schema inference complete: {}", schema_info.summary());
    Ok(schema_info)
}

/// Guess a schema from the first rows of a CSV file
pub fn infer_schema_from_file(path: &Path, has_header: bool) -> Result<SchemaInfo> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    infer_schema(file, has_header)
}
