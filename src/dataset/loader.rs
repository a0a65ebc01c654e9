//! Line-delimited JSON dataset loader.
//!
//! Reads the whole input file into ordered [`SourceRecord`]s. Any malformed
//! line or an unreadable file fails the entire load; the pipeline never
//! starts from a partial dataset.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::error::LoaderError;

/// Identifier key fallback chain, probed in order.
const IDENTIFIER_KEYS: [&str; 2] = ["id", "image"];

/// JSON key holding the ground-truth caption.
const CAPTION_KEY: &str = "value";

/// One input row, immutable once loaded.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Zero-based position in the input file.
    pub index: usize,
    /// Identifier taken from `id`, then `image`, then the line index.
    pub identifier: Value,
    /// Ground-truth caption, absent or empty captions are skipped later.
    pub caption: Option<String>,
}

impl SourceRecord {
    fn from_object(index: usize, object: &serde_json::Map<String, Value>) -> Self {
        let identifier = IDENTIFIER_KEYS
            .iter()
            .find_map(|key| object.get(*key).cloned())
            .unwrap_or_else(|| Value::from(index));

        let caption = object
            .get(CAPTION_KEY)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Self {
            index,
            identifier,
            caption,
        }
    }

    /// Whether the record carries a usable ground-truth caption.
    pub fn has_caption(&self) -> bool {
        self.caption.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Loads all records from a JSONL file, preserving file order.
///
/// Blank lines are skipped. Logs the record count and the union of observed
/// field names on success.
pub fn load_jsonl(path: &Path) -> Result<Vec<SourceRecord>, LoaderError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoaderError::FileNotFound(path.display().to_string())
        } else {
            LoaderError::Io(e)
        }
    })?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut field_names: BTreeSet<String> = BTreeSet::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value =
            serde_json::from_str(&line).map_err(|e| LoaderError::MalformedLine {
                line: line_number + 1,
                message: e.to_string(),
            })?;

        let object = value.as_object().ok_or(LoaderError::NotAnObject {
            line: line_number + 1,
        })?;

        field_names.extend(object.keys().cloned());
        records.push(SourceRecord::from_object(records.len(), object));
    }

    tracing::info!(
        records = records.len(),
        path = %path.display(),
        fields = ?field_names,
        "Loaded source dataset"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_jsonl(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        for line in lines {
            writeln!(file, "{}", line).expect("write line");
        }
        file
    }

    #[test]
    fn test_load_preserves_order() {
        let file = write_jsonl(&[
            r#"{"id": "a", "value": "first caption"}"#,
            r#"{"id": "b", "value": "second caption"}"#,
        ]);

        let records = load_jsonl(file.path()).expect("load should succeed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier, Value::from("a"));
        assert_eq!(records[1].identifier, Value::from("b"));
        assert_eq!(records[0].caption.as_deref(), Some("first caption"));
    }

    #[test]
    fn test_identifier_fallback_chain() {
        let file = write_jsonl(&[
            r#"{"id": 7, "image": "img.png", "value": "c"}"#,
            r#"{"image": "img2.png", "value": "c"}"#,
            r#"{"value": "c"}"#,
        ]);

        let records = load_jsonl(file.path()).expect("load should succeed");
        assert_eq!(records[0].identifier, Value::from(7));
        assert_eq!(records[1].identifier, Value::from("img2.png"));
        assert_eq!(records[2].identifier, Value::from(2));
    }

    #[test]
    fn test_missing_caption_detected() {
        let file = write_jsonl(&[r#"{"id": 1}"#, r#"{"id": 2, "value": ""}"#]);

        let records = load_jsonl(file.path()).expect("load should succeed");
        assert!(!records[0].has_caption());
        assert!(!records[1].has_caption());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = write_jsonl(&[r#"{"id": 1, "value": "c"}"#, "", r#"{"id": 2, "value": "c"}"#]);
        let records = load_jsonl(file.path()).expect("load should succeed");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let file = write_jsonl(&[r#"{"id": 1, "value": "c"}"#, "{not json"]);
        let result = load_jsonl(file.path());
        assert!(matches!(
            result,
            Err(LoaderError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_non_object_line_is_fatal() {
        let file = write_jsonl(&[r#"[1, 2, 3]"#]);
        assert!(matches!(
            load_jsonl(file.path()),
            Err(LoaderError::NotAnObject { line: 1 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_jsonl(Path::new("/nonexistent/dataset.jsonl"));
        assert!(matches!(result, Err(LoaderError::FileNotFound(_))));
    }
}
