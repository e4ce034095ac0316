use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::enrich::EnrichedRecord;

pub const DEFAULT_OUTPUT: &str = "translations.csv";
const HEADER: [&str; 2] = ["word", "translation"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Overwrites `path` with a `word,translation` CSV, one row per record in order.
///
/// Writes one progress line per row to `out` and returns the number of data rows.
pub fn write_csv<W: Write>(
    records: &[EnrichedRecord],
    path: &Path,
    out: &mut W,
) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for record in records {
        writeln!(out, "CSV row: {} -> {}", record.word, record.translation)?;
        writer.write_record([record.word.as_str(), record.translation.as_str()])?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = records.len(), "CSV written");
    Ok(records.len())
}
