//! CSV loader for box files
//!
//! Reads `id,x1,y1,x2,y2,category` rows into [`BoxRecord`]s, one per data
//! line, preserving file order. A failing line aborts the whole load.

use crate::config::{HeaderMode, LoaderConfig};
use crate::error::LoadError;
use crate::record::{parse_coordinate, BoxRecord, COORDINATE_FIELDS};
use std::path::Path;

/// Read a box file with the default configuration
///
/// # Errors
/// - `LoadError::NotFound` if `path` does not exist
/// - `LoadError::Io` if the file cannot be read
/// - `LoadError::Parse` on the first malformed data line
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<BoxRecord>, LoadError> {
    read_csv_with(path, &LoaderConfig::default())
}

/// Read a box file with an explicit configuration
///
/// # Errors
/// As [`read_csv`]
pub fn read_csv_with(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<Vec<BoxRecord>, LoadError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;

    let boxes = parse_csv(&content, path, config)?;
    tracing::info!(path = %path.display(), count = boxes.len(), "loaded boxes");
    Ok(boxes)
}

/// Parse box rows from in-memory text
///
/// `origin` only labels errors; nothing is read from it.
///
/// # Errors
/// `LoadError::Parse` on the first malformed data line
pub fn parse_csv(
    content: &str,
    origin: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<Vec<BoxRecord>, LoadError> {
    let origin = origin.as_ref();
    let mut boxes = Vec::new();
    let mut seen_first = false;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(config.delimiter).collect();

        if !seen_first {
            seen_first = true;
            if is_header(&fields, config.header) {
                tracing::debug!(path = %origin.display(), line = line_no, "skipping header");
                continue;
            }
        }

        match BoxRecord::from_fields(&fields[..]) {
            Ok(record) => boxes.push(record),
            Err(source) => {
                tracing::warn!(
                    path = %origin.display(),
                    line = line_no,
                    error = %source,
                    "malformed box row"
                );
                return Err(LoadError::parse_error(origin, line_no, line, source));
            }
        }
    }

    Ok(boxes)
}

/// Whether the first non-blank line is a header under `mode`
///
/// In `Auto` mode only the coordinate columns decide; a numeric row with the
/// wrong field count is data and fails later with `FieldCount`.
fn is_header(fields: &[&str], mode: HeaderMode) -> bool {
    match mode {
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
        HeaderMode::Auto => {
            fields.len() < COORDINATE_FIELDS.len() + 1
                || COORDINATE_FIELDS
                    .iter()
                    .zip(&fields[1..5])
                    .any(|(name, raw)| parse_coordinate(*name, raw).is_err())
        }
    }
}
