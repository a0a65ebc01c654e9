//! Per-type CSV export.
//!
//! Each hallucination kind gets its own file with the columns
//! {identifier, question, ground_truth, hallucinated_description,
//! hallucination_type} and a header row.

use std::path::Path;

use serde_json::Value;

use crate::error::ExportError;
use crate::pipeline::ResultRecord;
use crate::prompts::HallucinationKind;

/// Header written to every per-type file.
const HEADER: [&str; 5] = [
    "identifier",
    "question",
    "ground_truth",
    "hallucinated_description",
    "hallucination_type",
];

/// Writes the rows for one kind; returns the number of data rows.
///
/// Fails on an existing file unless `overwrite` is set.
pub fn write_kind(
    results: &[ResultRecord],
    kind: HallucinationKind,
    path: &Path,
    overwrite: bool,
) -> Result<usize, ExportError> {
    if path.exists() && !overwrite {
        return Err(ExportError::PathExists(path.display().to_string()));
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    for record in results {
        writer.write_record([
            identifier_text(&record.identifier).as_str(),
            record.question.as_str(),
            record.ground_truth.as_str(),
            record.variant(kind),
            kind.type_name(),
        ])?;
        rows += 1;
    }

    writer.flush().map_err(ExportError::Io)?;
    Ok(rows)
}

/// Renders an identifier value into a CSV cell without JSON quoting.
fn identifier_text(identifier: &Value) -> String {
    match identifier {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
