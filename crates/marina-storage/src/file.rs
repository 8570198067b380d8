//! Whole-file reads and writes of boat records.
//!
//! Reading never stops at a bad line: each line that fails to decode is
//! recorded in [`ReadOutcome::skipped`] and the rest of the file is still read.
//! An I/O failure ends the read but keeps every record decoded before it.
//! Writing truncates the destination and emits one encoded line per boat.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use marina_types::Boat;

use crate::codec::{DecodeError, decode_line, encode_line};
use crate::StorageError;

/// A line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the source.
    pub line_number: usize,
    pub error: DecodeError,
}

/// Result of reading a record source.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    /// Boats in file order.
    pub boats: Vec<Boat>,
    /// Lines that were skipped, in file order.
    pub skipped: Vec<SkippedLine>,
    /// Set when the reader failed before the end of the source.
    pub interrupted: Option<StorageError>,
}

/// Decodes every line of `reader`.
///
/// Blank lines are ignored without being reported. A read error stops at
/// that line and is kept in [`ReadOutcome::interrupted`].
pub fn read_records(reader: impl BufRead) -> ReadOutcome {
    let mut outcome = ReadOutcome::default();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let raw = match raw {
            Ok(raw) => raw,
            Err(source) => {
                tracing::warn!(line = line_number, error = %source, "read interrupted");
                outcome.interrupted = Some(StorageError::Io { source });
                break;
            }
        };

        let decoded = match std::str::from_utf8(&raw) {
            Ok(line) if line.trim_end_matches('\r').is_empty() => continue,
            Ok(line) => decode_line(line),
            Err(_) => Err(DecodeError::InvalidUtf8),
        };

        match decoded {
            Ok(boat) => outcome.boats.push(boat),
            Err(error) => {
                tracing::warn!(line = line_number, %error, "skipping malformed boat record");
                outcome.skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    outcome
}

/// Opens `path` and decodes every line.
///
/// # Errors
///
/// [`StorageError::Open`] if the file cannot be opened. Failures after that
/// are reported through [`ReadOutcome::interrupted`].
pub fn load_file(path: &Path) -> Result<ReadOutcome, StorageError> {
    let file = File::open(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = read_records(BufReader::new(file));

    tracing::debug!(
        path = %path.display(),
        loaded = outcome.boats.len(),
        skipped = outcome.skipped.len(),
        "read boat data file"
    );

    Ok(outcome)
}

/// Writes one encoded line per boat. Returns the number of lines written.
///
/// # Errors
///
/// Returns [`StorageError::Io`] if the writer fails.
pub fn write_records<'a>(
    mut writer: impl Write,
    boats: impl IntoIterator<Item = &'a Boat>,
) -> Result<usize, StorageError> {
    let mut written = 0;
    for boat in boats {
        writeln!(writer, "{}", encode_line(boat))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Replaces the contents of `path` with the given boats.
///
/// # Errors
///
/// - [`StorageError::Create`] if the file cannot be opened for writing
/// - [`StorageError::Io`] if writing fails part way through
pub fn save_file<'a>(
    path: &Path,
    boats: impl IntoIterator<Item = &'a Boat>,
) -> Result<usize, StorageError> {
    let file = File::create(path).map_err(|source| StorageError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let written = write_records(BufWriter::new(file), boats)?;

    tracing::debug!(path = %path.display(), written, "wrote boat data file");

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Field;
    use marina_types::Location;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_valid_lines_and_reports_bad_ones() {
        let source = "Alice,40,slip,12,0.00\n\
                      garbage\n\
                      \n\
                      Bob,20,land,C,5.00\r\n\
                      Carol,25,dock,1,0.00\n";

        let outcome = read_records(source.as_bytes());

        let names: Vec<_> = outcome.boats.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(
            outcome.skipped,
            vec![
                SkippedLine {
                    line_number: 2,
                    error: DecodeError::MissingField {
                        field: Field::Length
                    },
                },
                SkippedLine {
                    line_number: 5,
                    error: DecodeError::UnknownLocationKind {
                        keyword: "dock".into()
                    },
                },
            ]
        );
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut source = b"Alice,40,slip,12,0.00\n".to_vec();
        source.extend_from_slice(b"\xff\xfe,1,slip,1,0.00\n");

        let outcome = read_records(source.as_slice());

        assert_eq!(outcome.boats.len(), 1);
        assert_eq!(outcome.skipped[0].error, DecodeError::InvalidUtf8);
    }

    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    #[test]
    fn read_error_keeps_records_before_it() {
        let good = b"Alice,40,slip,12,0.00\nBob,20,land,C,0.00\n";
        let source = std::io::Read::chain(&good[..], Broken);

        let outcome = read_records(BufReader::new(source));

        assert_eq!(outcome.boats.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert!(matches!(outcome.interrupted, Some(StorageError::Io { .. })));
    }

    #[test]
    fn complete_read_is_not_interrupted() {
        let outcome = read_records(&b"Alice,40,slip,12,0.00\n"[..]);
        assert!(outcome.interrupted.is_none());
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StorageError::Open { .. }));
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boats.csv");
        let boats = vec![
            Boat::new("Zephyr", 31.0, Location::Storage { space: 4 }, 10.0),
            Boat::new("Albatross", 22.0, Location::Slip { number: 9 }, 0.0),
        ];

        assert_eq!(save_file(&path, &boats).unwrap(), 2);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Zephyr,31,storage,4,10.00\nAlbatross,22,slip,9,0.00\n"
        );
        assert_eq!(load_file(&path).unwrap().boats, boats);
    }

    #[test]
    fn save_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boats.csv");
        fs::write(&path, "Old,1,slip,1,0.00\nOlder,2,slip,2,0.00\n").unwrap();

        save_file(&path, &[Boat::new("New", 3.0, Location::Land { bay: 'A' }, 0.0)]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "New,3,land,A,0.00\n");
    }

    #[test]
    fn save_into_missing_directory_is_create_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("boats.csv");
        let err = save_file(&path, std::iter::empty::<&Boat>()).unwrap_err();
        assert!(matches!(err, StorageError::Create { .. }));
    }
}
