// Keyword records: one JSON object per source document.
//
// The file is a JSON array; each element must expose a `keywords` field
// holding an array of strings. Other fields (title, year, ...) are ignored.
// Elements are validated one by one so the error names the offending record.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::error::LoadError;

/// The keywords attached to one source document.
///
/// May contain duplicates; order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoOccurrenceRecord {
    pub keywords: Vec<String>,
}

impl CoOccurrenceRecord {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Load keyword records from a JSON file on disk.
pub fn load_records(path: &Path) -> Result<Vec<CoOccurrenceRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(BufReader::new(file))?;
    info!(records = records.len(), path = %path.display(), "Loaded keyword records");
    Ok(records)
}

/// Parse keyword records from any reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CoOccurrenceRecord>, LoadError> {
    let document: Value = serde_json::from_reader(reader)?;
    let Value::Array(elements) = document else {
        return Err(LoadError::NotAnArray);
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_record(index, element))
        .collect()
}

fn parse_record(index: usize, element: Value) -> Result<CoOccurrenceRecord, LoadError> {
    let malformed = |reason: String| LoadError::MalformedRecord { index, reason };

    let mut record: CoOccurrenceRecord =
        serde_json::from_value(element).map_err(|e| malformed(e.to_string()))?;

    for keyword in &mut record.keywords {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return Err(malformed("empty keyword".to_string()));
        }
        if trimmed.len() != keyword.len() {
            *keyword = trimmed.to_string();
        }
    }

    Ok(record)
}
