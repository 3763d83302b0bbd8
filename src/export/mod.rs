//! CSV export of resolved entries.

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::entry::ResolvedEntry;

/// Column order of the exported table.
const HEADER: [&str; 3] = ["type", "text", "detail_url"];

/// Errors that can occur while writing the CSV output file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created or a row could not be written.
    #[error("failed to write CSV to {path}: {source}")]
    Csv {
        /// The destination path.
        path: String,
        /// The underlying CSV/IO error.
        #[source]
        source: csv::Error,
    },

    /// Flushing buffered output failed.
    #[error("failed to flush CSV output to {path}: {source}")]
    Flush {
        /// The destination path.
        path: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// Writes entries as CSV rows to `path`.
///
/// Always writes the header row (`type,text,detail_url`), then one row
/// per entry in the given order; an empty entry slice produces a
/// header-only file. Quoting and escaping follow the CSV conventions of
/// the underlying writer.
///
/// # Errors
///
/// Returns [`ExportError`] when the file cannot be created or written.
pub fn write_csv(entries: &[ResolvedEntry], path: &Path) -> Result<(), ExportError> {
    let display_path = path.display().to_string();
    let csv_err = |source| ExportError::Csv {
        path: display_path.clone(),
        source,
    };

    // Header is written explicitly so an empty result set still yields a
    // well-formed, header-only table.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(HEADER).map_err(csv_err)?;
    for entry in entries {
        writer.serialize(entry).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Flush {
        path: display_path.clone(),
        source,
    })?;

    debug!(path = %display_path, rows = entries.len(), "CSV export complete");
    Ok(())
}
