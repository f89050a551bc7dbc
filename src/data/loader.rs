use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::{TrackRow, TrackTable, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading a source file, apart from the
/// file not existing (which is reported as `Ok(None)`).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON record {row}: {source}")]
    JsonRecord {
        row: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the raw track table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, first column is a row index and is dropped
/// * `.json` – `[{ "uri": ..., "artist": ..., ... }, ...]`
///
/// Header names / keys are matched ignoring ASCII case, so exports using
/// `Uri`, `Artist`, `Url_youtube` load as-is.
///
/// Returns `Ok(None)` when the file does not exist, whatever its extension.
pub fn load_file(path: &Path) -> Result<Option<TrackTable>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Source file {} does not exist", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if ext != "csv" && ext != "json" {
        return Err(LoadError::UnsupportedExtension(ext));
    }
    let reader = BufReader::new(file);

    let table = if ext == "csv" {
        read_csv(reader)?
    } else {
        read_json(reader)?
    };
    log::debug!("Read {} rows from {}", table.len(), path.display());
    Ok(Some(table))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Parse CSV text whose first column is a row index.
pub fn read_csv<R: Read>(input: R) -> Result<TrackTable, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let raw_headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { row: 0, source })?
        .clone();

    let headers: StringRecord = raw_headers
        .iter()
        .skip(1)
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    check_required(headers.iter())?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row_no = i + 1;
        let record = result.map_err(|source| LoadError::Csv {
            row: row_no,
            source,
        })?;
        let data: StringRecord = record.iter().skip(1).collect();
        let row: TrackRow = data
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::Csv {
                row: row_no,
                source,
            })?;
        rows.push(row);
    }

    Ok(TrackTable::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Parse a records-oriented JSON array.
pub fn read_json<R: Read>(input: R) -> Result<TrackTable, LoadError> {
    let records: Vec<Map<String, JsonValue>> = serde_json::from_reader(input)?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let row_no = i + 1;
        let normalized: Map<String, JsonValue> = record
            .into_iter()
            .map(|(key, val)| (key.to_ascii_lowercase(), val))
            .collect();
        check_required(normalized.keys().map(String::as_str))?;

        let row: TrackRow = serde_json::from_value(JsonValue::Object(normalized))
            .map_err(|source| LoadError::JsonRecord {
                row: row_no,
                source,
            })?;
        rows.push(row);
    }

    Ok(TrackTable::from_rows(rows))
}

fn check_required<'a>(columns: impl Iterator<Item = &'a str>) -> Result<(), LoadError> {
    let present: BTreeSet<&str> = columns.collect();
    match REQUIRED_COLUMNS.iter().find(|c| !present.contains(*c)) {
        Some(missing) => Err(LoadError::MissingColumn(missing.to_string())),
        None => Ok(()),
    }
}
