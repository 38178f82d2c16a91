//! Column to field mapping
//!
//! This module resolves a record schema into the column → slot mapping used
//! for one decode call. Schemas that tag at least one field are resolved in
//! tagged mode; schemas with no tags at all map columns to fields by
//! position.

use crate::error::SchemaError;
use crate::schema::RecordSchema;
use std::collections::{BTreeMap, BTreeSet};
use std::num::IntErrorKind;
use tracing::{debug, warn};

/// How columns were assigned to fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    /// Columns come from per-field column tags
    Tagged,
    /// Column `i` feeds field `i`
    Positional,
}

/// Immutable column → slot mapping for one decode call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    mode: MapMode,
    columns: BTreeMap<usize, usize>,
}

impl FieldMap {
    /// Resolve the mapping for a schema.
    ///
    /// `ignore_columns` only applies in positional mode, where every value
    /// must be a valid field index.
    pub fn resolve(
        schema: &RecordSchema,
        ignore_columns: &BTreeSet<usize>,
    ) -> Result<Self, SchemaError> {
        if schema.is_empty() {
            return Err(SchemaError::NoMapping);
        }

        let field_map = if schema.is_tagged() {
            if !ignore_columns.is_empty() {
                warn!(
                    "Ignoring {} ignore-column entries: schema declares column tags",
                    ignore_columns.len()
                );
            }
            Self::resolve_tagged(schema)?
        } else {
            Self::resolve_positional(schema, ignore_columns)?
        };

        if field_map.columns.is_empty() {
            return Err(SchemaError::NoMapping);
        }

        debug!(
            "Resolved {:?} field map: {} of {} fields mapped",
            field_map.mode,
            field_map.columns.len(),
            schema.len()
        );

        Ok(field_map)
    }

    fn resolve_tagged(schema: &RecordSchema) -> Result<Self, SchemaError> {
        let mut columns = BTreeMap::new();

        for (slot, field) in schema.fields().iter().enumerate() {
            let Some(tag) = field.column_tag() else {
                continue;
            };
            let column = parse_column_tag(field.name(), tag)?;

            // Later fields win on duplicate tags
            if let Some(previous) = columns.insert(column, slot) {
                debug!(
                    "Column {} reassigned from field '{}' to field '{}'",
                    column,
                    schema.fields()[previous].name(),
                    field.name()
                );
            }
        }

        Ok(Self {
            mode: MapMode::Tagged,
            columns,
        })
    }

    fn resolve_positional(
        schema: &RecordSchema,
        ignore_columns: &BTreeSet<usize>,
    ) -> Result<Self, SchemaError> {
        let field_count = schema.len();

        if let Some(&index) = ignore_columns.iter().find(|&&index| index >= field_count) {
            return Err(SchemaError::ColumnOutOfRange { index, field_count });
        }

        let columns = (0..field_count)
            .filter(|column| !ignore_columns.contains(column))
            .map(|column| (column, column))
            .collect();

        Ok(Self {
            mode: MapMode::Positional,
            columns,
        })
    }

    pub fn mode(&self) -> MapMode {
        self.mode
    }

    /// Slot fed by the given column, if it is mapped
    pub fn slot_for(&self, column: usize) -> Option<usize> {
        self.columns.get(&column).copied()
    }

    /// Mapped `(column, slot)` pairs in ascending column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().map(|(&column, &slot)| (column, slot))
    }

    /// Highest mapped column index
    pub fn max_column(&self) -> Option<usize> {
        self.columns.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Parse a raw column tag as a base-10 non-negative index.
///
/// `-0` is column 0. Any other value with a minus sign is negative, even
/// when it is too large to represent.
fn parse_column_tag(field: &str, tag: &str) -> Result<usize, SchemaError> {
    let negative = || SchemaError::NegativeColumnIndex {
        field: field.to_string(),
        tag: tag.to_string(),
    };

    match tag.parse::<isize>() {
        Ok(index) if index < 0 => Err(negative()),
        Ok(index) => Ok(index.unsigned_abs()),
        Err(source) if *source.kind() == IntErrorKind::NegOverflow => Err(negative()),
        Err(source) => Err(SchemaError::InvalidColumnTag {
            field: field.to_string(),
            tag: tag.to_string(),
            source,
        }),
    }
}
