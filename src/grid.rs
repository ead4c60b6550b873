use crate::cell::ElementCell;
use crate::dataset::ElementTable;

pub const GRID_ROWS: u8 = 10;
pub const GRID_COLS: u8 = 18;

/// Footnote shown in the empty slot that stands in for the f-block series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootnoteMarker {
    Lanthanides,
    Actinides,
}

impl FootnoteMarker {
    pub fn at(row: u8, col: u8) -> Option<Self> {
        match (row, col) {
            (6, 3) => Some(FootnoteMarker::Lanthanides),
            (7, 3) => Some(FootnoteMarker::Actinides),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FootnoteMarker::Lanthanides => "*",
            FootnoteMarker::Actinides => "**",
        }
    }
}

pub const PLACEHOLDER_CLASS: &str =
    "flex items-center justify-center text-gray-600 font-bold opacity-30";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    Element(ElementCell),
    Placeholder(Option<FootnoteMarker>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSlot {
    pub row: u8,
    pub col: u8,
    pub content: SlotContent,
}

impl GridSlot {
    pub fn cell(&self) -> Option<&ElementCell> {
        match &self.content {
            SlotContent::Element(cell) => Some(cell),
            SlotContent::Placeholder(_) => None,
        }
    }
}

/// Lays out every grid position in row-major order.
///
/// Positions without an element become placeholders; (6, 3) and (7, 3) carry the
/// lanthanide and actinide footnote markers when no element occupies them.
pub fn build_grid(table: &ElementTable) -> Vec<GridSlot> {
    let mut slots = Vec::with_capacity(usize::from(GRID_ROWS) * usize::from(GRID_COLS));

    for row in 1..=GRID_ROWS {
        for col in 1..=GRID_COLS {
            let content = match table.at(row, col) {
                Some(element) => SlotContent::Element(ElementCell::build(element)),
                None => SlotContent::Placeholder(FootnoteMarker::at(row, col)),
            };

            slots.push(GridSlot { row, col, content });
        }
    }

    let placed = slots.iter().filter(|slot| slot.cell().is_some()).count();
    if placed < table.len() {
        log::warn!(
            "{} of {} elements fall outside the grid or share a position",
            table.len() - placed,
            table.len()
        );
    }

    slots
}

/// Element cells of a built grid, in grid order.
pub fn cells(slots: &[GridSlot]) -> impl Iterator<Item = &ElementCell> {
    slots.iter().filter_map(GridSlot::cell)
}
