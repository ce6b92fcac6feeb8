// Categories table: one (Category, Keyword) row per keyword leaf.
//
// The table is a headed CSV file. Column names follow the exported
// spreadsheet ("Category", "Keyword"); extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::LoadError;

/// A single row of the categories table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Keyword")]
    pub keyword: String,
}

impl CategoryRecord {
    pub fn new(category: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            keyword: keyword.into(),
        }
    }
}

/// Load the categories table from a CSV file on disk.
pub fn load_categories(path: &Path) -> Result<Vec<CategoryRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_categories(file)?;
    info!(rows = rows.len(), path = %path.display(), "Loaded categories table");
    Ok(rows)
}

/// Parse a categories table from any reader.
///
/// Fields are trimmed. A row with an empty category or keyword is rejected
/// rather than turned into a nameless leaf.
pub fn read_categories<R: Read>(reader: R) -> Result<Vec<CategoryRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<CategoryRecord>() {
        let row = result?;
        if row.category.is_empty() || row.keyword.is_empty() {
            // Header is line 1, so the first data row is line 2
            let line = rows.len() as u64 + 2;
            let reason = if row.category.is_empty() {
                "empty Category"
            } else {
                "empty Keyword"
            };
            return Err(LoadError::MalformedCategory {
                line,
                reason: reason.to_string(),
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_headed_table() {
        let data = "Category,Keyword\nMethods, survey \nMethods,interview\nTheory,framing\n";
        let rows = read_categories(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], CategoryRecord::new("Methods", "survey"));
        assert_eq!(rows[2], CategoryRecord::new("Theory", "framing"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let rows = read_categories("Category,Keyword\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let data = "Category,Keyword\nMethods,survey\nMethods,\n";
        let err = read_categories(data.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedCategory { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_rejected() {
        let data = "Category,Label\nMethods,survey\n";
        assert!(matches!(
            read_categories(data.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }
}
