use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Marks a missing measurement; the whole line is dropped.
pub const MISSING: &str = "-";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: read failed: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected 3 ':'-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {field} value '{value}' is not a finite number")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one group from a `gender:t1:t2` text file.
pub fn load_file(path: &Path, label: &str) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_reader(BufReader::new(file), label)?;

    log::info!(
        "Loaded {} {} records from {} ({} incomplete lines skipped)",
        dataset.len(),
        label,
        path.display(),
        dataset.skipped
    );
    Ok(dataset)
}

/// Parse records from any buffered source. The first malformed line aborts.
pub fn parse_reader<R: BufRead>(reader: R, label: &str) -> Result<Dataset, LoadError> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        match parse_line(&line, line_no)? {
            Some(record) => records.push(record),
            None => {
                log::debug!("{label}: line {line_no} has a missing measurement, skipped");
                skipped += 1;
            }
        }
    }

    Ok(Dataset::new(label, records, skipped))
}

/// Parse a single line. `Ok(None)` means the line carries the missing-value
/// marker and contributes nothing.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Record>, LoadError> {
    let fields: Vec<&str> = line.trim().split(':').collect();
    let [gender, t1, t2] = fields.as_slice() else {
        return Err(LoadError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    if t1.trim() == MISSING || t2.trim() == MISSING {
        return Ok(None);
    }

    Ok(Some(Record {
        gender: gender.to_string(),
        weight_t1: parse_weight(t1, line_no, "t1")?,
        weight_t2: parse_weight(t2, line_no, "t2")?,
    }))
}

/// Weights must parse and be finite; `nan` and `inf` are rejected.
fn parse_weight(raw: &str, line: usize, field: &'static str) -> Result<f64, LoadError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LoadError::InvalidNumber {
            line,
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    fn parse(text: &str) -> Result<Dataset, LoadError> {
        parse_reader(Cursor::new(text), "test")
    }

    #[test]
    fn scenario_drops_sentinel_line() {
        let ds = parse("male:100:10\nfemale:400:200\nmale:-:50\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped, 1);
        let genders: Vec<&str> = ds.records.iter().map(|r| r.gender.as_str()).collect();
        assert_eq!(genders, ["male", "female"]);
        assert_eq!(ds.records[0].weight_t1, 100.0);
        assert_eq!(ds.records[1].weight_t1, 400.0);
        assert_eq!(ds.records[0].weight_t2, 10.0);
        assert_eq!(ds.records[1].weight_t2, 200.0);
    }

    #[test]
    fn sentinel_in_either_field_skips_line() {
        let ds = parse("H:-:50\nF:60:-\nH:-:-\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.skipped, 3);
    }

    #[test]
    fn preserves_order_and_count() {
        let text: String = (1..=20).map(|i| format!("F:{i}:{}\n", i * 2)).collect();
        let ds = parse(&text).unwrap();
        assert_eq!(ds.len(), 20);
        for (i, rec) in ds.records.iter().enumerate() {
            assert_eq!(rec.weight_t1, (i + 1) as f64);
            assert_eq!(rec.weight_t2, ((i + 1) * 2) as f64);
        }
    }

    #[test]
    fn tolerates_crlf_and_padding() {
        let ds = parse("H: 70.5 :72\r\nF:55:54.25\r\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].weight_t1, 70.5);
        assert_eq!(ds.records[1].weight_t2, 54.25);
    }

    #[test]
    fn wrong_field_count_aborts() {
        let err = parse("H:70:72\nF:55\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 2, found: 2 }));

        let err = parse("H:70:72:1\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 1, found: 4 }));
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = parse("H:70:72\n\nF:55:54\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 2, found: 1 }));
    }

    #[test]
    fn non_numeric_value_aborts() {
        let err = parse("H:70:abc\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 1);
                assert_eq!(field, "t2");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_value_aborts() {
        let err = parse("H:70:nan\nF:60:72\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 1, field: "t2", .. }));

        let err = parse("H:70:72\nF:60:inf\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 2, field: "t2", .. }));

        let err = parse("H:-inf:72\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 1, field: "t1", .. }));
    }

    #[test]
    fn padded_dash_counts_as_missing() {
        let ds = parse("H: - :72\nF:60:61\n").unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.skipped, 1);
    }

    #[test]
    fn read_failure_reports_line_not_path() {
        // 0xFF is not valid UTF-8, so `lines()` fails on the second line.
        let bytes: &[u8] = b"H:70:72\n\xFF:60:61\n";
        let err = parse_reader(Cursor::new(bytes), "control").unwrap_err();
        match err {
            LoadError::Read { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "H:80:78\nF:-:60\nF:62:61\n").unwrap();

        let ds = load_file(file.path(), "control").unwrap();
        assert_eq!(ds.label, "control");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = load_file(&path, "experimental").unwrap_err();
        match err {
            LoadError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
