//! Query predicates.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// A single predicate over catalog items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring in title, description or category.
    /// Holds the lowercased needle.
    Text(String),
    /// Exact category id.
    Category(String),
    /// Exact difficulty label.
    Difficulty(String),
}

impl Filter {
    /// Create a text filter. The needle is case-folded once here.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().to_lowercase())
    }

    pub fn category(id: impl Into<String>) -> Self {
        Filter::Category(id.into())
    }

    pub fn difficulty(label: impl Into<String>) -> Self {
        Filter::Difficulty(label.into())
    }

    /// Whether `item` satisfies this predicate.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            Filter::Text(needle) => item.matches_text(needle),
            Filter::Category(id) => item.category == *id,
            Filter::Difficulty(label) => item.difficulty.as_str() == label,
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Text(_) => FilterKind::Search,
            Filter::Category(_) => FilterKind::Category,
            Filter::Difficulty(_) => FilterKind::Difficulty,
        }
    }
}

/// Which filter an [`ActiveFilter`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Search,
    Category,
    Difficulty,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Search => "search",
            FilterKind::Category => "category",
            FilterKind::Difficulty => "difficulty",
        }
    }
}

/// A non-default filter, labelled for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveFilter {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub label: String,
    pub value: String,
}

impl ActiveFilter {
    pub fn new(kind: FilterKind, value: &str) -> Self {
        let label = match kind {
            FilterKind::Search => format!("Search: \"{}\"", value),
            FilterKind::Category => format!("Category: {}", value),
            FilterKind::Difficulty => format!("Level: {}", value),
        };
        Self {
            kind,
            label,
            value: value.to_string(),
        }
    }
}
