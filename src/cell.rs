use crate::dispatch::Action;
use crate::element::{Element, Phase};

/// Text emphasis applied to a cell's symbol according to the element's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTone {
    Default,
    Gas,
    Liquid,
    Unknown,
}

impl SymbolTone {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Solid => SymbolTone::Default,
            Phase::Gas => SymbolTone::Gas,
            Phase::Liquid => SymbolTone::Liquid,
            Phase::Unknown => SymbolTone::Unknown,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SymbolTone::Default => "text-white",
            SymbolTone::Gas => "text-red-300",
            SymbolTone::Liquid => "text-blue-300",
            SymbolTone::Unknown => "text-gray-400",
        }
    }
}

/// Presentation model of one element on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCell {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    /// Category attribute the category filter compares against.
    pub category: String,
    pub tone: SymbolTone,
    /// Action dispatched when the cell is clicked.
    pub action: Action,
}

impl ElementCell {
    pub fn build(element: &Element) -> Self {
        Self {
            number: element.number,
            symbol: element.symbol.clone(),
            name: element.name.clone(),
            category: element.category.clone(),
            tone: SymbolTone::for_phase(element.state),
            action: Action::ShowElement(element.number),
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "element-cell category-{} rounded-lg p-2 flex flex-col items-center justify-between text-center",
            self.category
        )
    }

    pub fn symbol_class(&self) -> String {
        format!("text-lg font-black tracking-tighter {}", self.tone.class())
    }

    /// Visible text of the cell, the haystack for the search filter.
    pub fn text(&self) -> String {
        format!("{}\n{}\n{}", self.number, self.symbol, self.name)
    }
}
