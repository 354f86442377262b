//! Query results.

use serde::Serialize;

use crate::catalog::CatalogItem;

/// The visible slice of a query plus its metadata.
///
/// Items borrow from the source collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryResult<'a> {
    /// Items to display, in sorted order.
    pub page: Vec<&'a CatalogItem>,
    /// Number of items that matched before paging.
    pub total: usize,
    /// Whether more matches exist beyond `page`.
    pub has_more: bool,
}

impl<'a> QueryResult<'a> {
    /// Result with no matches.
    pub fn empty() -> Self {
        Self {
            page: Vec::new(),
            total: 0,
            has_more: false,
        }
    }

    /// True when nothing matched (render the "no results" state).
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.page.len()
    }

    /// Matches not yet shown.
    pub fn remaining(&self) -> usize {
        self.total - self.page.len()
    }

    /// Ids of the page items, in order.
    pub fn ids(&self) -> Vec<String> {
        self.page.iter().map(|item| item.id.to_string()).collect()
    }

    /// Clone the page out of the source collection.
    pub fn to_owned_items(&self) -> Vec<CatalogItem> {
        self.page.iter().map(|item| (*item).clone()).collect()
    }
}

impl Default for QueryResult<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = QueryResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.remaining(), 0);
        assert!(!result.has_more);
    }

    #[test]
    fn test_remaining() {
        let items = vec![CatalogItem::new(1, "a"), CatalogItem::new(2, "b")];
        let result = QueryResult {
            page: items.iter().take(1).collect(),
            total: 2,
            has_more: true,
        };
        assert_eq!(result.remaining(), 1);
        assert_eq!(result.ids(), vec!["1"]);
        assert_eq!(result.to_owned_items(), vec![items[0].clone()]);
    }

    #[test]
    fn test_serializes_page_items() {
        let item = CatalogItem::new(7, "Seven");
        let result = QueryResult {
            page: vec![&item],
            total: 1,
            has_more: false,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["has_more"], false);
        assert_eq!(json["page"][0]["title"], "Seven");
    }
}
