use std::fmt;

use crate::cell::ElementCell;

/// Token selecting every category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interprets a control token; `"all"` selects every category.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, cell: &ElementCell) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &cell.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Search query and category selection, tracked independently.
///
/// A cell is visible only when it satisfies both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    category: CategoryFilter,
}

impl FilterState {
    pub fn with_query(self, query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
            ..self
        }
    }

    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    /// Lowercased search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn matches_query(&self, cell: &ElementCell) -> bool {
        cell.text().to_lowercase().contains(&self.query)
    }

    pub fn is_visible(&self, cell: &ElementCell) -> bool {
        self.matches_query(cell) && self.category.matches(cell)
    }
}
