use std::fmt;

/// Phase of an element at standard temperature and pressure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    /// Also used for any phase label the dataset does not recognise.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
            Phase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single record of the element dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Atomic number.
    pub number: u32,
    pub symbol: String,
    pub name: String,
    /// Grid row, 1-indexed.
    pub row: u8,
    /// Grid column, 1-indexed.
    pub col: u8,
    /// Category tag such as `noble-gas`, used for styling and filtering.
    pub category: String,
    #[serde(default)]
    pub state: Phase,
    /// Standard atomic mass in unified atomic mass units.
    pub mass: f64,
    /// Electron configuration notation.
    #[serde(default)]
    pub electron: String,
    /// Year or era of discovery. Numeric years in the source data are kept as text.
    #[serde(default, deserialize_with = "text_or_number")]
    pub discovered: String,
    #[serde(default)]
    pub discoverer: String,
}

impl Element {
    pub fn occupies(&self, row: u8, col: u8) -> bool {
        self.row == row && self.col == col
    }

    /// Text a reader sees on the element's cell: number, symbol and name.
    pub fn cell_text(&self) -> String {
        format!("{}\n{}\n{}", self.number, self.symbol, self.name)
    }

    pub fn mass_label(&self) -> String {
        format!("{} u", self.mass)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.symbol, self.number)
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <Option<TextOrNumber> as serde::Deserialize>::deserialize(deserializer)?;

    Ok(match value {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Integer(year)) => year.to_string(),
        Some(TextOrNumber::Float(year)) => year.to_string(),
        None => String::new(),
    })
}
