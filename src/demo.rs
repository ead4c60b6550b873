use crate::dataset::{DatasetError, ElementTable};

/// Bundled copy of the full periodic table, used when the page supplies no dataset.
pub const BUILTIN_DATASET: &str = include_str!("../assets/elements.json");

pub fn builtin_table() -> Result<ElementTable, DatasetError> {
    ElementTable::from_json_str(BUILTIN_DATASET)
}
