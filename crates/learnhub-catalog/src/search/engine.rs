//! The catalog query engine.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{
    catalog_stats, summarize_categories, CatalogItem, CatalogStats, CategorySummary,
};
use crate::error::CatalogError;
use crate::format::count_label;
use crate::ids::ItemId;
use crate::search::{QueryResult, QuerySpec};

/// Run one filter/sort/paginate pass over `source`.
///
/// Pure: `source` is not modified and the result borrows from it. Sorting is
/// stable, so items with equal keys keep their source order.
pub fn query<'a>(source: &'a [CatalogItem], spec: &QuerySpec) -> QueryResult<'a> {
    let filters = spec.filters();

    let mut matched: Vec<&CatalogItem> = source
        .iter()
        .filter(|item| filters.iter().all(|f| f.matches(item)))
        .collect();

    matched.sort_by(|a, b| spec.sort.compare(a, b));

    let total = matched.len();
    matched.truncate(spec.limit());
    let has_more = total > matched.len();

    debug!(
        source = source.len(),
        filters = filters.len(),
        sort = spec.sort.as_str(),
        total,
        shown = matched.len(),
        has_more,
        "catalog query"
    );

    QueryResult {
        page: matched,
        total,
        has_more,
    }
}

/// An immutable tutorial collection that answers [`QuerySpec`]s.
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryEngine {
    items: Vec<CatalogItem>,
}

impl CatalogQueryEngine {
    /// Create an engine over `items`, kept in the given order.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Decode a catalog document (a JSON array of tutorial objects).
    ///
    /// Entries that are not objects are skipped. Fields inside objects are
    /// decoded leniently and never cause an error.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(text)?;
        let Value::Array(entries) = document else {
            return Err(CatalogError::Serialization(
                "catalog document must be a JSON array".to_string(),
            ));
        };

        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                warn!(index, "skipping non-object catalog entry");
                continue;
            }
            items.push(CatalogItem::deserialize(entry)?);
        }

        debug!(items = items.len(), "catalog loaded");
        Ok(Self::new(items))
    }

    /// All items in source order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run `spec` against the catalog.
    pub fn query(&self, spec: &QuerySpec) -> QueryResult<'_> {
        query(&self.items, spec)
    }

    /// Look up an item by id. `"7"` finds numeric id 7.
    pub fn find(&self, raw_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id.matches(raw_id))
    }

    /// Look up an item by id, or fail with [`CatalogError::ItemNotFound`].
    pub fn get(&self, id: &ItemId) -> Result<&CatalogItem, CatalogError> {
        self.find(&id.to_string())
            .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()))
    }

    /// The first `n` items in source order.
    pub fn featured(&self, n: usize) -> &[CatalogItem] {
        &self.items[..n.min(self.items.len())]
    }

    /// Per-category rollups.
    pub fn categories(&self) -> Vec<CategorySummary> {
        summarize_categories(&self.items)
    }

    /// Catalog-wide totals over the category rollups.
    pub fn stats(&self) -> CatalogStats {
        catalog_stats(&self.categories())
    }

    /// "N Tutorials Available" / "N of M Tutorials" for a result.
    pub fn count_label(&self, result: &QueryResult<'_>) -> String {
        count_label(result.total, self.len())
    }
}

impl From<Vec<CatalogItem>> for CatalogQueryEngine {
    fn from(items: Vec<CatalogItem>) -> Self {
        Self::new(items)
    }
}
