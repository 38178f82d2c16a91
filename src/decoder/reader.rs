//! Row decoding orchestration
//!
//! [`Reader`] drives one decode call from start to finish: it resolves the
//! field map, optionally discards a header row, then reads rows strictly in
//! input order, enforcing the row-length policy and coercing every mapped
//! cell. Every row must have as many cells as the first row read; a forced
//! row length additionally pins that width to a fixed value. The first failure of any kind ends the call; records decoded before
//! it are dropped.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, info};

use super::coercion::coerce;
use super::field_map::FieldMap;
use super::stats::DecodeStats;
use crate::config::ReaderConfig;
use crate::error::{AssignError, ParseCause};
use crate::record::{CsvRecord, DynamicRecord};
use crate::schema::RecordSchema;
use crate::value::Value;
use crate::{Error, Result};

/// Decodes CSV input into records of type `T`.
///
/// A reader holds only its configuration, so one reader can serve any
/// number of decode calls, including concurrent ones on separate streams.
pub struct Reader<T> {
    config: ReaderConfig,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Reader<T> {
    fn clone(&self) -> Self {
        Self::with_config(self.config.clone())
    }
}

impl<T> fmt::Debug for Reader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("record", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Default for Reader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Reader<T> {
    /// Create a reader with default options
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self {
            config,
            _record: PhantomData,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

impl<T: CsvRecord> Reader<T> {
    /// Decode every row of `input`
    pub fn decode<R: Read>(&self, input: R) -> Result<Vec<T>> {
        self.decode_with_stats(input).map(|(records, _)| records)
    }

    /// Decode every row of `input` and report what was read
    pub fn decode_with_stats<R: Read>(&self, input: R) -> Result<(Vec<T>, DecodeStats)> {
        scan(T::schema(), &self.config, input, T::default, |record, slot, value| {
            record.assign(slot, value)
        })
    }

    /// Open `path`, decode it entirely, then close it
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Vec<T>> {
        let file = open(path.as_ref())?;
        self.decode(file)
    }
}

impl Reader<DynamicRecord> {
    /// Decode every row of `input` against a run-time schema
    pub fn decode_dynamic<R: Read>(
        &self,
        schema: &RecordSchema,
        input: R,
    ) -> Result<Vec<DynamicRecord>> {
        self.decode_dynamic_with_stats(schema, input)
            .map(|(records, _)| records)
    }

    pub fn decode_dynamic_with_stats<R: Read>(
        &self,
        schema: &RecordSchema,
        input: R,
    ) -> Result<(Vec<DynamicRecord>, DecodeStats)> {
        scan(
            schema,
            &self.config,
            input,
            || DynamicRecord::for_schema(schema),
            |record, slot, value| record.set(slot, value),
        )
    }

    /// Open `path` and decode it against a run-time schema
    pub fn decode_dynamic_file(
        &self,
        schema: &RecordSchema,
        path: impl AsRef<Path>,
    ) -> Result<Vec<DynamicRecord>> {
        let file = open(path.as_ref())?;
        self.decode_dynamic(schema, file)
    }
}

fn open(path: &Path) -> Result<File> {
    info!("Decoding CSV file: {}", path.display());
    File::open(path).map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))
}

/// Run one decode call.
///
/// `new_record` creates a blank record for each row and `assign` stores a
/// coerced value in it.
fn scan<R, T, N, A>(
    schema: &RecordSchema,
    config: &ReaderConfig,
    input: R,
    mut new_record: N,
    mut assign: A,
) -> Result<(Vec<T>, DecodeStats)>
where
    R: Read,
    N: FnMut() -> T,
    A: FnMut(&mut T, usize, Value) -> std::result::Result<(), AssignError>,
{
    let field_map = FieldMap::resolve(schema, &config.ignore_columns)?;

    let mut stats = DecodeStats::new();
    stats.mapped_columns = field_map.len();

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut raw = csv::StringRecord::new();

    // Every row, header included, must be as wide as the first row read
    let mut row_width = None;

    if config.ignore_header_row {
        if !csv_reader
            .read_record(&mut raw)
            .map_err(|e| Error::csv(0, e))?
        {
            return Err(Error::MissingHeader);
        }
        debug!("Skipped header row with {} cells", raw.len());
        row_width = Some(raw.len());
        stats.header_skipped = true;
    }

    let forced_row_length = config.forced_row_length();
    let mut records = Vec::new();
    let mut row = 1;

    while csv_reader
        .read_record(&mut raw)
        .map_err(|e| Error::csv(row, e))?
    {
        let width = *row_width.get_or_insert(raw.len());
        // A ragged row is reported against the first row's width
        let expected = if raw.len() == width {
            forced_row_length.unwrap_or(width)
        } else {
            width
        };
        if raw.len() != expected {
            let cause = ParseCause::RowLength {
                expected,
                actual: raw.len(),
            };
            return Err(Error::parse(row, 0, &raw, cause));
        }

        let mut record = new_record();
        for (column, slot) in field_map.iter() {
            // Mapped columns past the end of the row stay unassigned
            let Some(cell) = raw.get(column) else {
                break;
            };
            // Slots come from the resolved map and always index the schema
            let field = &schema.fields()[slot];

            let value =
                coerce(field, cell).map_err(|cause| Error::parse(row, column, &raw, cause))?;
            assign(&mut record, slot, value)
                .map_err(|cause| Error::parse(row, column, &raw, cause))?;
        }

        records.push(record);
        stats.rows_read += 1;
        row += 1;
    }

    stats.records_decoded = records.len();
    info!("{}", stats.summary());

    Ok((records, stats))
}
