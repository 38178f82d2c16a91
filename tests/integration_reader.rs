//! Integration tests for decoding CSV files into typed records
//!
//! These tests drive the public API end to end: records declared with
//! `csv_record!`, reader options loaded from TOML, and files on disk.

use csvscan::{ErrorKind, ParseCause, Reader, ReaderConfig, csv_record};
use std::io::Write;
use tempfile::NamedTempFile;

csv_record! {
    /// A weather observation with the station id in the last column
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Observation {
        pub station: u32 => 3,
        pub date: String => 0,
        pub max_temp: f64 => 1,
        pub min_temp: f32 => 2,
        pub quality_checked: bool => 4,
    }
}

csv_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Sample {
        pub id: u64,
        pub label: String,
        pub offset: i16,
    }
}

const OBSERVATIONS: &str = "\
date,max_temp,min_temp,station,qc
1960-01-01,8.4,2.1,1330,T
1960-01-02,9.0,-0.5,1330,false
\"1960-01-03\",10.25,1.0,1330,1
";

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Decode a headed file with tagged fields
///
/// Purpose: Verify tags, not declaration order, pick the columns
/// Benefit: Record layouts stay independent of file layouts
#[test]
fn test_decode_tagged_file_with_header() {
    let file = write_file(OBSERVATIONS);
    let reader = Reader::<Observation>::with_config(ReaderConfig::new().with_header_row_ignored());

    let observations = reader.decode_file(file.path()).unwrap();

    assert_eq!(observations.len(), 3);
    assert_eq!(
        observations[0],
        Observation {
            station: 1330,
            date: "1960-01-01".to_string(),
            max_temp: 8.4,
            min_temp: 2.1,
            quality_checked: true,
        }
    );
    assert_eq!(observations[1].min_temp, -0.5);
    assert!(!observations[1].quality_checked);
    assert_eq!(observations[2].date, "1960-01-03");
    assert!(observations[2].quality_checked);
}

/// Decode the same file without skipping the header
///
/// Purpose: The header row is data unless told otherwise
/// Benefit: Error positions point at the offending header cell
#[test]
fn test_header_treated_as_data_fails_coercion() {
    let file = write_file(OBSERVATIONS);
    let err = Reader::<Observation>::new()
        .decode_file(file.path())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Coercion);
    assert_eq!(err.row(), Some(1));
    // first mapped column in ascending order is max_temp
    assert_eq!(err.column(), Some(1));
    assert_eq!(err.raw_row().unwrap()[3], "station");
}

/// Load reader options from TOML and decode with them
///
/// Purpose: Config files drive the same options as the builder methods
/// Benefit: Deployments can tune decoding without recompiling
#[test]
fn test_decode_with_toml_config() {
    let config_file = write_file(
        "ignore_header_row = true\n\
         forced_row_length = 3\n\
         ignore_columns = [1]\n",
    );
    let config = ReaderConfig::from_toml_file(config_file.path()).unwrap();
    let reader = Reader::<Sample>::with_config(config);

    let samples = reader
        .decode("id,label,offset\n1,unused,-3\n2,,40\n".as_bytes())
        .unwrap();

    assert_eq!(
        samples,
        [
            Sample {
                id: 1,
                label: String::new(),
                offset: -3,
            },
            Sample {
                id: 2,
                label: String::new(),
                offset: 40,
            },
        ]
    );

    let err = reader
        .decode("id,label,offset\n1,a,2\n3,b\n".as_bytes())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RowLength);
    assert_eq!(err.row(), Some(2));
}

/// Report the first failure with its position
///
/// Purpose: Decoding stops at the first bad cell and reports where it is
/// Benefit: Users can locate bad data in large files
#[test]
fn test_first_failure_is_reported() {
    let input = "1,a,1\n2,b,99999\n-3,c,1\n";
    let err = Reader::<Sample>::new().decode(input.as_bytes()).unwrap_err();

    assert_eq!(err.row(), Some(2));
    assert_eq!(err.column(), Some(2));
    assert_eq!(err.raw_row().unwrap(), ["2", "b", "99999"]);

    let parse = err.as_parse_error().unwrap();
    assert!(matches!(parse.cause, ParseCause::Coercion(_)));

    // the full chain names the value and the offending kind
    let chain = format!("{:#}", anyhow::Error::from(err));
    assert!(chain.contains("Row 2, column 2"), "{chain}");
    assert!(chain.contains("99999"), "{chain}");
}

/// Decode large input in one call
///
/// Purpose: Rows are read in order regardless of input size
/// Benefit: The reader is usable on real data volumes
#[test]
fn test_decode_many_rows() {
    let mut input = String::new();
    for i in 0..5_000u64 {
        input.push_str(&format!("{},row {},{}\n", i, i, (i % 200) as i16 - 100));
    }

    let (samples, stats) = Reader::<Sample>::new()
        .decode_with_stats(input.as_bytes())
        .unwrap();

    assert_eq!(samples.len(), 5_000);
    assert_eq!(stats.rows_read, 5_000);
    assert_eq!(stats.mapped_columns, 3);
    assert!(samples.iter().enumerate().all(|(i, s)| s.id == i as u64));
    assert_eq!(samples[4_999].label, "row 4999");
}
