//! Combined line-delimited JSON export.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::pipeline::ResultRecord;

/// File name of the combined export inside the output directory.
pub const COMBINED_FILE_NAME: &str = "all_hallucinations.jsonl";

/// Writes every result as one JSON object per line, in processing order.
///
/// Fails on an existing file unless `overwrite` is set.
pub fn write_combined(
    results: &[ResultRecord],
    path: &Path,
    overwrite: bool,
) -> Result<(), ExportError> {
    if path.exists() && !overwrite {
        return Err(ExportError::PathExists(path.display().to_string()));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in results {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a combined JSONL file back into result records.
///
/// Used by the re-export command and by round-trip tests.
pub fn read_combined(path: &Path) -> Result<Vec<ResultRecord>, ExportError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_records() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(COMBINED_FILE_NAME);

        let mut degraded =
            ResultRecord::uniform(Value::from(2), "other".to_string(), "[LLM Error]");
        degraded.error_message = Some("Object: HTTP request failed".to_string());
        let results = vec![
            ResultRecord::uniform(Value::from("img_1"), "a caption".to_string(), "variant"),
            degraded,
        ];

        write_combined(&results, &path, false).expect("write");
        let back = read_combined(&path).expect("read");
        assert_eq!(results, back);
    }

    #[test]
    fn test_collision_guard() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(COMBINED_FILE_NAME);
        std::fs::write(&path, "existing\n").expect("seed");

        let results = vec![ResultRecord::uniform(Value::from(0), "c".to_string(), "t")];
        assert!(matches!(
            write_combined(&results, &path, false),
            Err(ExportError::PathExists(_))
        ));

        // Overwrite replaces the prior content.
        write_combined(&results, &path, true).expect("overwrite");
        let back = read_combined(&path).expect("read");
        assert_eq!(back.len(), 1);
    }
}
