//! Line-delimited data files.
//!
//! One value per line, UTF-8. On read, each line is trimmed, a leading
//! byte-order mark is dropped and blank lines are skipped.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::DataFileError;

/// The byte-order mark, as it appears after UTF-8 decoding.
pub const BOM: char = '\u{feff}';

/// ISO-8601 local date-time, the format timestamps are written in.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A value that can be read from one non-blank line.
pub trait FromLine: Sized {
    fn from_line(line: &str) -> Option<Self>;
}

/// A value that can be written as one line.
pub trait ToLine {
    fn to_line(&self) -> String;
}

impl FromLine for char {
    /// The first character of the line.
    fn from_line(line: &str) -> Option<char> {
        return line.chars().next();
    }
}

impl ToLine for char {
    fn to_line(&self) -> String {
        return self.to_string();
    }
}

impl FromLine for NaiveDateTime {
    fn from_line(line: &str) -> Option<NaiveDateTime> {
        return NaiveDateTime::parse_from_str(line, TIMESTAMP_FORMAT).ok();
    }
}

impl ToLine for NaiveDateTime {
    fn to_line(&self) -> String {
        return self.format(TIMESTAMP_FORMAT).to_string();
    }
}

fn clean(line: &str) -> &str {
    let line = line.trim();
    return line.strip_prefix(BOM).unwrap_or(line).trim_start();
}

/// Read every non-blank line of `path` into a value.
pub fn load<T: FromLine>(path: impl AsRef<Path>) -> Result<Vec<T>, DataFileError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| DataFileError::Io { path: path.to_path_buf(), source };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error)?;
        let text = clean(&line);
        if text.is_empty() {
            continue;
        }
        let value = T::from_line(text).ok_or_else(|| DataFileError::Parse {
            line: index + 1,
            text: text.to_string(),
        })?;
        values.push(value);
    }

    tracing::debug!(path = %path.display(), count = values.len(), "loaded data file");
    return Ok(values);
}

/// Write each value on its own line, replacing whatever `path` held.
pub fn save<T: ToLine>(path: impl AsRef<Path>, values: &[T]) -> Result<(), DataFileError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| DataFileError::Io { path: path.to_path_buf(), source };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    for value in values {
        writeln!(writer, "{}", value.to_line()).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    tracing::debug!(path = %path.display(), count = values.len(), "saved data file");
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_takes_first_char_and_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\u{feff}zebra").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "  apple  ").unwrap();
        writeln!(file, "ї").unwrap();

        let chars: Vec<char> = load(file.path()).unwrap();
        assert_eq!(chars, vec!['z', 'a', 'ї']);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load::<char>(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(DataFileError::Io { .. })));
    }

    #[test]
    fn save_then_load_round_trips_chars() {
        let file = NamedTempFile::new().unwrap();
        let chars = vec!['q', 'a', 'Z', '7', 'ж'];
        save(file.path(), &chars).unwrap();
        assert_eq!(load::<char>(file.path()).unwrap(), chars);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let file = NamedTempFile::new().unwrap();
        save(file.path(), &['a', 'b', 'c']).unwrap();
        save(file.path(), &['x']).unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "x\n");
    }

    #[test]
    fn timestamps_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let stamps: Vec<NaiveDateTime> = ["2024-03-01T10:15:30", "1999-12-31T23:59:59.250"]
            .iter()
            .map(|s| NaiveDateTime::from_line(s).unwrap())
            .collect();
        save(file.path(), &stamps).unwrap();
        assert_eq!(load::<NaiveDateTime>(file.path()).unwrap(), stamps);
    }

    #[test]
    fn unparsable_timestamp_reports_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2024-03-01T10:15:30").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "yesterday").unwrap();

        match load::<NaiveDateTime>(file.path()) {
            Err(DataFileError::Parse { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "yesterday");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
