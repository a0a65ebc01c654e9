//! Result persistence: combined JSONL plus per-type CSV files.

pub mod csv;
pub mod jsonl;

use std::path::Path;

use crate::pipeline::ResultRecord;
use crate::prompts::HallucinationKind;

pub use jsonl::{read_combined, write_combined, COMBINED_FILE_NAME};

/// Writes the combined JSONL and the five per-type CSVs.
///
/// The two operations are independent: a combined-file failure is logged
/// and does not block the per-type exports, and a failure for one kind does
/// not abort the remaining kinds.
pub fn write_all(
    results: &[ResultRecord],
    output_dir: &Path,
    overwrite: bool,
) -> Result<(), crate::error::ExportError> {
    if results.is_empty() {
        return Err(crate::error::ExportError::NoResults);
    }

    std::fs::create_dir_all(output_dir)?;

    let combined_path = output_dir.join(COMBINED_FILE_NAME);
    match jsonl::write_combined(results, &combined_path, overwrite) {
        Ok(()) => tracing::info!(path = %combined_path.display(), "Saved combined results"),
        Err(e) => tracing::error!(error = %e, "Failed to save combined JSONL file"),
    }

    for kind in HallucinationKind::ALL {
        let path = output_dir.join(kind.csv_file_name());
        match csv::write_kind(results, kind, &path, overwrite) {
            Ok(rows) => {
                tracing::info!(kind = %kind, rows, path = %path.display(), "Saved per-type CSV")
            }
            Err(e) => tracing::error!(kind = %kind, error = %e, "Failed to save per-type CSV"),
        }
    }

    Ok(())
}
