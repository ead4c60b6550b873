use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::element::Element;

/// Ordered, read-only collection of element records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementTable {
    elements: Vec<Element>,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset file at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse element dataset: {source}")]
    Parse { source: serde_json::Error },
    #[error("failed to fetch element dataset from {url}: {message}")]
    Fetch { url: String, message: String },
}

impl PartialEq for DatasetError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Read { path: left, .. }, Self::Read { path: right, .. }) => left == right,
            (Self::Parse { .. }, Self::Parse { .. }) => true,
            (
                Self::Fetch {
                    url: left_url,
                    message: left_message,
                },
                Self::Fetch {
                    url: right_url,
                    message: right_message,
                },
            ) => left_url == right_url && left_message == right_message,
            _ => false,
        }
    }
}

impl Eq for DatasetError {}

impl ElementTable {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parses a JSON array of element records.
    ///
    /// # Errors
    /// * [`DatasetError::Parse`] when the document is not a list of element records.
    ///
    /// An empty list is accepted; the grid then shows placeholders only.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let elements: Vec<Element> =
            serde_json::from_str(json).map_err(|source| DatasetError::Parse { source })?;

        if elements.is_empty() {
            log::warn!("element dataset holds no records");
        }

        log::info!("parsed element dataset with {} records", elements.len());
        Ok(Self { elements })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&data)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element placed at the given grid position. The first record in dataset order wins.
    pub fn at(&self, row: u8, col: u8) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.occupies(row, col))
    }

    pub fn by_number(&self, number: u32) -> Option<&Element> {
        self.elements.iter().find(|element| element.number == number)
    }

    /// Distinct category tags, sorted.
    pub fn categories(&self) -> BTreeSet<String> {
        self.elements
            .iter()
            .map(|element| element.category.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Phase;

    fn element(number: u32, symbol: &str, name: &str, row: u8, col: u8, category: &str) -> Element {
        Element {
            number,
            symbol: symbol.to_string(),
            name: name.to_string(),
            row,
            col,
            category: category.to_string(),
            state: Phase::Solid,
            mass: f64::from(number) * 2.0,
            electron: String::new(),
            discovered: String::new(),
            discoverer: String::new(),
        }
    }

    fn sample_table() -> ElementTable {
        ElementTable::new(vec![
            element(1, "H", "Hydrogen", 1, 1, "nonmetal"),
            element(2, "He", "Helium", 1, 18, "noble-gas"),
            element(3, "Li", "Lithium", 2, 1, "alkali-metal"),
        ])
    }

    #[test]
    fn looks_up_by_position() {
        let table = sample_table();

        assert_eq!(table.at(1, 18).map(|found| found.symbol.as_str()), Some("He"));
        assert!(table.at(1, 2).is_none());
    }

    #[test]
    fn first_record_wins_on_shared_position() {
        let table = ElementTable::new(vec![
            element(1, "H", "Hydrogen", 1, 1, "nonmetal"),
            element(99, "Xx", "Duplicate", 1, 1, "nonmetal"),
        ]);

        assert_eq!(table.at(1, 1).map(|found| found.number), Some(1));
    }

    #[test]
    fn looks_up_by_number() {
        let table = sample_table();

        assert_eq!(table.by_number(3).map(|found| found.name.as_str()), Some("Lithium"));
        assert!(table.by_number(42).is_none());
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let categories: Vec<String> = sample_table().categories().into_iter().collect();

        assert_eq!(categories, vec!["alkali-metal", "noble-gas", "nonmetal"]);
    }

    #[test]
    fn parses_json_array() {
        let json = r#"[
            {"number": 1, "symbol": "H", "name": "Hydrogen", "row": 1, "col": 1,
             "category": "nonmetal", "state": "Gas", "mass": 1.008,
             "electron": "1s1", "discovered": 1766, "discoverer": "Cavendish"}
        ]"#;

        let table = ElementTable::from_json_str(json).expect("dataset should parse");

        assert_eq!(table.len(), 1);
        assert_eq!(table.elements()[0].discovered, "1766");
    }

    #[test]
    fn accepts_empty_array() {
        let table = ElementTable::from_json_str("[]").expect("empty dataset should parse");

        assert!(table.is_empty());
        assert!(table.categories().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let error = ElementTable::from_json_str("{\"elements\": 3}")
            .expect_err("malformed dataset should error");

        assert!(matches!(error, DatasetError::Parse { .. }));
    }

    #[test]
    fn loads_from_file() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let path = root.path().join("elements.json");
        let payload =
            serde_json::to_string(sample_table().elements()).expect("elements should serialize");
        fs::write(&path, payload).expect("dataset should be written");

        let table = ElementTable::from_file(&path).expect("dataset should load");

        assert_eq!(table, sample_table());
    }

    #[test]
    fn missing_file_reports_path() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let path = root.path().join("missing.json");

        let error = ElementTable::from_file(&path).expect_err("missing file should error");

        assert_eq!(
            error,
            DatasetError::Read {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
        );
    }
}
