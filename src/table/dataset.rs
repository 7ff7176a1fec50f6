use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::error::DatasetError;

const DEFAULT_DATASET_TOML: &str = include_str!("../../resources/elements.toml");

/// One record of the element reference dataset.
///
/// All four fields are required; a record missing any of them fails
/// deserialization outright.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementRecord {
    pub number: u8,
    pub name: String,
    pub symbol: String,
    pub mass: f64,
}

#[derive(Debug, Deserialize)]
struct Dataset {
    elements: Vec<ElementRecord>,
}

/// Parses an element dataset from TOML text, falling back to the embedded
/// 118-element reference dataset when no custom text is given. Records are
/// returned in dataset order.
pub fn load_dataset(custom_toml: Option<&str>) -> Result<Vec<ElementRecord>, DatasetError> {
    let text = custom_toml.unwrap_or(DEFAULT_DATASET_TOML);
    let dataset: Dataset = toml::from_str(text)?;
    debug!("parsed element dataset with {} records", dataset.elements.len());
    Ok(dataset.elements)
}

/// Reads a dataset file in full and parses it. The file handle is not held
/// beyond this call.
pub fn read_dataset_file(path: impl AsRef<Path>) -> Result<Vec<ElementRecord>, DatasetError> {
    let text = fs::read_to_string(path)?;
    load_dataset(Some(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_has_all_elements_in_order() {
        let records = load_dataset(None).unwrap();
        assert_eq!(records.len(), 118);
        assert_eq!(records[0].symbol, "H");
        assert_eq!(records[0].number, 1);
        assert_eq!(records[7].symbol, "O");
        assert_eq!(records[117].symbol, "Og");
        for (position, record) in records.iter().enumerate() {
            assert_eq!(usize::from(record.number), position + 1);
        }
    }

    #[test]
    fn custom_dataset_parses_valid_toml() {
        let custom = r#"
            [[elements]]
            number = 1
            name = "Hydrogen"
            symbol = "H"
            mass = 1.008
        "#;
        let records = load_dataset(Some(custom)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Hydrogen");
        assert_eq!(records[0].mass, 1.008);
    }

    #[test]
    fn errors_on_invalid_toml() {
        let result = load_dataset(Some("not valid [[[toml"));
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn errors_on_a_record_missing_a_field() {
        let missing_mass = r#"
            [[elements]]
            number = 1
            name = "Hydrogen"
            symbol = "H"
        "#;
        let result = load_dataset(Some(missing_mass));
        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn missing_dataset_file_is_an_io_error() {
        let result = read_dataset_file("/nonexistent/elements.toml");
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
