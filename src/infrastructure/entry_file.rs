//! Entry records stored as JSON
//!
//! A file holds either one entry object or an array of them.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::domain::EntryRecord;
use crate::support::errors::InputError;

/// Parse entry records from JSON text.
pub fn parse_entries(text: &str) -> Result<Vec<EntryRecord>, InputError> {
    let value: Value = serde_json::from_str(text)?;
    let records = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(records)
}

/// Read and parse an entries file.
pub fn load_entries(path: &Path) -> Result<Vec<EntryRecord>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_entries(&text)?;
    info!("Loaded {} entries from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_is_one_entry() {
        let records = parse_entries(r#"{"id": "E-7", "slot": "8hr", "rate": 2000}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_deref(), Some("E-7"));
    }

    #[test]
    fn array_is_many_entries() {
        let records = parse_entries(r#"[{"slot": "4hr"}, {"slot": "8hr"}, {}]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].billing.usage.slot_name(), "8hr");
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(parse_entries("[{"), Err(InputError::Json(_))));
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(parse_entries("42").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_entries(Path::new("/nonexistent/entries.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
