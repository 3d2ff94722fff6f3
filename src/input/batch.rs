use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::stats::{RawPassingInput, StatField};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("batch file has no header row: {0}")]
    MissingHeader(String),
    #[error("batch header has no attempts column")]
    MissingAttemptsColumn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub line_no: usize,
    pub input: RawPassingInput,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, BatchError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_batch(path: &Path) -> Result<Vec<BatchRow>, BatchError> {
    let reader = open_maybe_gz(path)?;
    read_batch(reader, &path.display().to_string())
}

/// Reads one line, decoding invalid UTF-8 lossily so one bad row cannot sink the file.
fn next_line<R: BufRead>(reader: &mut R, bytes: &mut Vec<u8>) -> Result<Option<String>, BatchError> {
    bytes.clear();
    if reader.read_until(b'\n', bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(bytes);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads a tab-separated games table. The header names columns case-insensitively;
/// absent columns read as empty text and are left to the parsing policy.
pub fn read_batch<R: BufRead>(mut reader: R, source: &str) -> Result<Vec<BatchRow>, BatchError> {
    let mut bytes = Vec::new();
    let mut line_no = 0usize;

    let header = loop {
        let Some(line) = next_line(&mut reader, &mut bytes)? else {
            return Err(BatchError::MissingHeader(source.to_string()));
        };
        line_no += 1;
        let line = line.trim_start_matches('\u{feff}');
        if !line.trim().is_empty() {
            break line.to_string();
        }
    };
    let mut columns: HashMap<String, usize> = HashMap::new();
    for (idx, name) in header.split('\t').enumerate() {
        columns
            .entry(name.trim().to_ascii_lowercase())
            .or_insert(idx);
    }
    if !columns.contains_key(StatField::Attempts.column()) {
        return Err(BatchError::MissingAttemptsColumn);
    }

    let name_col = columns
        .get("name")
        .or_else(|| columns.get("player"))
        .copied();
    let col = |field: StatField| columns.get(field.column()).copied();

    let mut rows = Vec::new();
    while let Some(line) = next_line(&mut reader, &mut bytes)? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| fields.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        let input = RawPassingInput {
            player: cell(name_col),
            attempts: cell(col(StatField::Attempts)),
            completions: cell(col(StatField::Completions)),
            yards: cell(col(StatField::Yards)),
            touchdowns: cell(col(StatField::Touchdowns)),
            interceptions: cell(col(StatField::Interceptions)),
        };
        if input.player.is_empty() {
            warn!(line = line_no, "batch row has no player name");
        }
        rows.push(BatchRow { line_no, input });
    }

    debug!(source, rows = rows.len(), "batch file loaded");
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/batch.rs"]
mod tests;
