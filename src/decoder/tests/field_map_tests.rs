//! Tests for column to field resolution

use super::*;
use crate::decoder::field_map::{FieldMap, MapMode};
use crate::error::SchemaError;
use crate::record::CsvRecord;
use std::collections::BTreeSet;

fn no_ignores() -> BTreeSet<usize> {
    BTreeSet::new()
}

fn pairs(field_map: &FieldMap) -> Vec<(usize, usize)> {
    field_map.iter().collect()
}

#[test]
fn test_tagged_mode_maps_only_tagged_fields() {
    let field_map = FieldMap::resolve(Point::schema(), &no_ignores()).unwrap();

    assert_eq!(field_map.mode(), MapMode::Tagged);
    assert_eq!(pairs(&field_map), [(0, 0), (1, 1)]);
    assert_eq!(field_map.slot_for(2), None);
}

#[test]
fn test_tagged_mode_follows_tags_not_declaration_order() {
    let field_map = FieldMap::resolve(Reordered::schema(), &no_ignores()).unwrap();

    assert_eq!(pairs(&field_map), [(0, 1), (2, 0)]);
    assert_eq!(field_map.max_column(), Some(2));
}

#[test]
fn test_duplicate_tag_later_field_wins() {
    let field_map = FieldMap::resolve(DuplicateTag::schema(), &no_ignores()).unwrap();

    assert_eq!(field_map.len(), 1);
    assert_eq!(field_map.slot_for(0), Some(1));
}

#[test]
fn test_negative_tag_rejected() {
    let err = FieldMap::resolve(NegativeTag::schema(), &no_ignores()).unwrap_err();
    assert_eq!(
        err,
        SchemaError::NegativeColumnIndex {
            field: "value".to_string(),
            tag: "-1".to_string(),
        }
    );
}

#[test]
fn test_negative_zero_tag_is_column_zero() {
    let schema = RecordSchema::builder()
        .tagged_field("name", FieldKind::Text, "-0")
        .build();

    let field_map = FieldMap::resolve(&schema, &no_ignores()).unwrap();
    assert_eq!(pairs(&field_map), [(0, 0)]);
}

#[test]
fn test_huge_negative_tag_is_negative() {
    let tag = "-99999999999999999999999999";
    let schema = RecordSchema::builder()
        .tagged_field("name", FieldKind::Text, tag)
        .build();

    assert_eq!(
        FieldMap::resolve(&schema, &no_ignores()).unwrap_err(),
        SchemaError::NegativeColumnIndex {
            field: "name".to_string(),
            tag: tag.to_string(),
        }
    );
}

#[test]
fn test_huge_positive_tag_is_invalid() {
    let schema = RecordSchema::builder()
        .tagged_field("name", FieldKind::Text, "99999999999999999999999999")
        .build();

    assert!(matches!(
        FieldMap::resolve(&schema, &no_ignores()),
        Err(SchemaError::InvalidColumnTag { .. })
    ));
}

#[test]
fn test_plus_signed_tag_is_accepted() {
    let schema = RecordSchema::builder()
        .tagged_field("name", FieldKind::Text, "+2")
        .build();

    let field_map = FieldMap::resolve(&schema, &no_ignores()).unwrap();
    assert_eq!(field_map.slot_for(2), Some(0));
}

#[test]
fn test_non_numeric_tag_rejected() {
    let schema = RecordSchema::builder()
        .tagged_field("name", FieldKind::Text, "first")
        .build();

    match FieldMap::resolve(&schema, &no_ignores()).unwrap_err() {
        SchemaError::InvalidColumnTag { field, tag, .. } => {
            assert_eq!(field, "name");
            assert_eq!(tag, "first");
        }
        other => panic!("expected invalid tag, got {:?}", other),
    }
}

#[test]
fn test_empty_tag_rejected() {
    let schema = RecordSchema::builder()
        .tagged_field("name", FieldKind::Text, "")
        .build();

    assert!(matches!(
        FieldMap::resolve(&schema, &no_ignores()),
        Err(SchemaError::InvalidColumnTag { .. })
    ));
}

#[test]
fn test_tagged_mode_ignores_ignore_columns() {
    let ignores = BTreeSet::from([0, 99]);
    let field_map = FieldMap::resolve(Point::schema(), &ignores).unwrap();
    assert_eq!(pairs(&field_map), [(0, 0), (1, 1)]);
}

#[test]
fn test_positional_mode_maps_every_field() {
    let field_map = FieldMap::resolve(AllKinds::schema(), &no_ignores()).unwrap();

    assert_eq!(field_map.mode(), MapMode::Positional);
    assert_eq!(field_map.len(), 14);
    assert!(field_map.iter().all(|(column, slot)| column == slot));
}

#[test]
fn test_positional_mode_skips_ignored_columns() {
    let ignores = BTreeSet::from([0, 13]);
    let field_map = FieldMap::resolve(AllKinds::schema(), &ignores).unwrap();

    assert_eq!(field_map.len(), 12);
    assert_eq!(field_map.slot_for(0), None);
    assert_eq!(field_map.slot_for(1), Some(1));
    assert_eq!(field_map.slot_for(13), None);
}

#[test]
fn test_positional_ignore_out_of_range() {
    let ignores = BTreeSet::from([14]);
    let err = FieldMap::resolve(AllKinds::schema(), &ignores).unwrap_err();

    assert_eq!(
        err,
        SchemaError::ColumnOutOfRange {
            index: 14,
            field_count: 14,
        }
    );
    assert_eq!(
        err.to_string(),
        "column index out of range: 14 (schema has 14 fields)"
    );
}

#[test]
fn test_empty_schema_has_no_mapping() {
    let err = FieldMap::resolve(&RecordSchema::default(), &no_ignores()).unwrap_err();
    assert_eq!(err, SchemaError::NoMapping);
}

#[test]
fn test_every_column_ignored_has_no_mapping() {
    let ignores = BTreeSet::from([0, 1]);
    let err = FieldMap::resolve(&text_schema(2), &ignores).unwrap_err();
    assert_eq!(err, SchemaError::NoMapping);
}

#[test]
fn test_resolution_is_deterministic() {
    let first = FieldMap::resolve(Reordered::schema(), &no_ignores()).unwrap();
    let second = FieldMap::resolve(Reordered::schema(), &no_ignores()).unwrap();
    assert_eq!(first, second);
}
