//! Decodable record types.
//!
//! A type becomes decodable by implementing [`CsvRecord`]: it exposes its
//! [`RecordSchema`] (built once and cached) and accepts coerced values by
//! slot index. The [`csv_record!`](crate::csv_record) macro writes both for a
//! plain struct declaration, and [`DynamicRecord`] covers schemas that are
//! only known at run time.

use crate::error::AssignError;
use crate::schema::RecordSchema;
use crate::value::Value;

/// A record type the decoder can fill from CSV rows
pub trait CsvRecord: Default {
    /// Schema of this record type, in field declaration order
    fn schema() -> &'static RecordSchema;

    /// Store a coerced value in the field at `slot`
    fn assign(&mut self, slot: usize, value: Value) -> Result<(), AssignError>;
}

/// Declare a struct and implement [`CsvRecord`] for it.
///
/// Each field may be followed by `=> tag`, where the tag is the 0-based
/// column the field reads from, given as a string or integer literal. When
/// no field is tagged, columns map to fields by position. The struct must
/// implement [`Default`]; unmapped fields keep their default value.
///
/// ```
/// use csvscan::{csv_record, Reader};
///
/// csv_record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Point {
///         pub x: i64 => 0,
///         pub y: i64 => "1",
///         pub label: String,
///     }
/// }
///
/// let points = Reader::<Point>::new().decode("1,2,3\n4,5,6".as_bytes())?;
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1], Point { x: 4, y: 5, label: String::new() });
/// # Ok::<(), csvscan::Error>(())
/// ```
#[macro_export]
macro_rules! csv_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::CsvRecord for $name {
            fn schema() -> &'static $crate::RecordSchema {
                static SCHEMA: ::std::sync::OnceLock<$crate::RecordSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::RecordSchema::new(::std::vec![
                        $(
                            $crate::FieldDescriptor::new(
                                ::core::stringify!($field),
                                <$ty as $crate::FieldType>::KIND,
                            )
                            $(.with_tag($tag))?
                        ),*
                    ])
                })
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn assign(
                &mut self,
                slot: usize,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::AssignError> {
                let mut index = 0usize;
                $(
                    if index == slot {
                        self.$field = <$ty as $crate::FieldType>::from_value(value)?;
                        return ::core::result::Result::Ok(());
                    }
                    index += 1;
                )*
                ::core::result::Result::Err($crate::AssignError::NoSuchSlot(slot))
            }
        }
    };
}

/// A record whose shape comes from a run-time schema.
///
/// Slots that the field map never assigned stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicRecord {
    values: Vec<Option<Value>>,
}

impl DynamicRecord {
    /// An empty record with one unset slot per schema field
    pub fn for_schema(schema: &RecordSchema) -> Self {
        Self {
            values: vec![None; schema.len()],
        }
    }

    pub fn get(&self, slot: usize) -> Option<&Value> {
        self.values.get(slot).and_then(Option::as_ref)
    }

    /// Look a value up by field name
    pub fn get_by_name(&self, schema: &RecordSchema, name: &str) -> Option<&Value> {
        schema.slot_of(name).and_then(|slot| self.get(slot))
    }

    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, slot: usize, value: Value) -> Result<(), AssignError> {
        let target = self
            .values
            .get_mut(slot)
            .ok_or(AssignError::NoSuchSlot(slot))?;
        *target = Some(value);
        Ok(())
    }
}
