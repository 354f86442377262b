//! Query intent: search, filters, sort and load-more paging.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::error::CatalogError;
use crate::search::filter::{ActiveFilter, Filter, FilterKind};

/// Filter value meaning "do not filter on this attribute".
pub const ALL: &str = "all";

/// Items added per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort options for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest id first.
    #[default]
    Newest,
    /// Most students first.
    Popular,
    /// Highest rated first. Unrated items rank last.
    Rating,
    /// Shortest first.
    Duration,
}

impl SortKey {
    pub const VARIANTS: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Popular,
        SortKey::Rating,
        SortKey::Duration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::Duration => "duration",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Popular => "Most Popular",
            SortKey::Rating => "Highest Rated",
            SortKey::Duration => "Shortest First",
        }
    }

    /// Ordering of two items under this key.
    ///
    /// Only the key is compared; equal keys report `Equal` so a stable sort
    /// keeps source order.
    pub fn compare(&self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            SortKey::Newest => b.id.cmp_key(&a.id),
            SortKey::Popular => b.popularity_rank().cmp(&a.popularity_rank()),
            SortKey::Rating => b.rating_rank().total_cmp(&a.rating_rank()),
            SortKey::Duration => a.duration_minutes.cmp(&b.duration_minutes),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "popular" => Ok(SortKey::Popular),
            "rating" => Ok(SortKey::Rating),
            "duration" => Ok(SortKey::Duration),
            other => Err(CatalogError::UnknownSortKey(other.to_string())),
        }
    }
}

/// The combined filter, sort and paging intent for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    /// Case-insensitive substring matched against title, description and category.
    pub search_text: String,
    /// Exact category id, or [`ALL`].
    pub category: String,
    /// Exact difficulty label, or [`ALL`].
    pub difficulty: String,
    /// Sort option.
    pub sort: SortKey,
    /// Items per page.
    pub page_size: usize,
    /// Pages requested so far (load-more count).
    pub pages_requested: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::new()
    }
}

impl QuerySpec {
    /// Create a spec that matches everything, newest first, one page of 12.
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            category: ALL.to_string(),
            difficulty: ALL.to_string(),
            sort: SortKey::Newest,
            page_size: DEFAULT_PAGE_SIZE,
            pages_requested: 1,
        }
    }

    /// Set the search text. Resets paging.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.pages_requested = 1;
        self
    }

    /// Set the category filter. Resets paging.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self.pages_requested = 1;
        self
    }

    /// Set the difficulty filter. Resets paging.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self.pages_requested = 1;
        self
    }

    /// Set the sort option. Resets paging.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self.pages_requested = 1;
        self
    }

    /// Set the page size, clamped to at least 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set how many pages have been requested, clamped to at least 1.
    pub fn with_pages_requested(mut self, pages: usize) -> Self {
        self.pages_requested = pages.max(1);
        self
    }

    /// Request one more page.
    pub fn load_more(mut self) -> Self {
        self.pages_requested = self.pages_requested.saturating_add(1);
        self
    }

    /// Maximum number of items the page may hold.
    pub fn limit(&self) -> usize {
        self.page_size.saturating_mul(self.pages_requested)
    }

    /// Check a spec built from raw input.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidPageSize(self.page_size));
        }
        if self.pages_requested == 0 {
            return Err(CatalogError::InvalidPagesRequested(self.pages_requested));
        }
        Ok(())
    }

    /// Predicates this spec applies. Pass-through filters are omitted.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if !self.search_text.is_empty() {
            filters.push(Filter::text(&self.search_text));
        }
        if self.category != ALL {
            filters.push(Filter::Category(self.category.clone()));
        }
        if self.difficulty != ALL {
            filters.push(Filter::Difficulty(self.difficulty.clone()));
        }
        filters
    }

    /// Human-readable chips for every non-default filter.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.search_text.is_empty() {
            active.push(ActiveFilter::new(FilterKind::Search, &self.search_text));
        }
        if self.category != ALL {
            active.push(ActiveFilter::new(FilterKind::Category, &self.category));
        }
        if self.difficulty != ALL {
            active.push(ActiveFilter::new(FilterKind::Difficulty, &self.difficulty));
        }
        active
    }

    /// Reset one filter to its default. Resets paging.
    pub fn remove_filter(self, kind: FilterKind) -> Self {
        match kind {
            FilterKind::Search => self.with_search(""),
            FilterKind::Category => self.with_category(ALL),
            FilterKind::Difficulty => self.with_difficulty(ALL),
        }
    }

    /// Reset search, filters and sort. Page size is kept.
    pub fn clear_filters(self) -> Self {
        let page_size = self.page_size;
        Self::new().with_page_size(page_size)
    }

    /// Whether any filter narrows the catalog.
    pub fn is_filtered(&self) -> bool {
        !self.filters().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = QuerySpec::new();
        assert_eq!(spec.category, "all");
        assert_eq!(spec.difficulty, "all");
        assert_eq!(spec.sort, SortKey::Newest);
        assert_eq!(spec.limit(), 12);
        assert!(!spec.is_filtered());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_load_more_and_reset() {
        let spec = QuerySpec::new().with_page_size(5).load_more().load_more();
        assert_eq!(spec.pages_requested, 3);
        assert_eq!(spec.limit(), 15);

        let spec = spec.with_category("cooking");
        assert_eq!(spec.pages_requested, 1);
        assert_eq!(spec.page_size, 5);
    }

    #[test]
    fn test_page_size_clamped() {
        let spec = QuerySpec::new().with_page_size(0).with_pages_requested(0);
        assert_eq!(spec.page_size, 1);
        assert_eq!(spec.pages_requested, 1);
    }

    #[test]
    fn test_limit_saturates() {
        let spec = QuerySpec::new()
            .with_page_size(usize::MAX)
            .with_pages_requested(3);
        assert_eq!(spec.limit(), usize::MAX);
    }

    #[test]
    fn test_validate_raw_input() {
        let spec = QuerySpec {
            page_size: 0,
            ..QuerySpec::new()
        };
        assert_eq!(spec.validate(), Err(CatalogError::InvalidPageSize(0)));

        let spec = QuerySpec {
            pages_requested: 0,
            ..QuerySpec::new()
        };
        assert_eq!(spec.validate(), Err(CatalogError::InvalidPagesRequested(0)));
    }

    #[test]
    fn test_active_filters_order_and_labels() {
        let spec = QuerySpec::new()
            .with_difficulty("advanced")
            .with_search("bread")
            .with_category("cooking");

        let labels: Vec<_> = spec.active_filters().into_iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![r#"Search: "bread""#, "Category: cooking", "Level: advanced"]
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let spec = QuerySpec::new()
            .with_search("bread")
            .with_category("cooking")
            .with_sort(SortKey::Rating)
            .with_page_size(6);

        let removed = spec.clone().remove_filter(FilterKind::Category);
        assert_eq!(removed.category, ALL);
        assert_eq!(removed.search_text, "bread");

        let cleared = spec.clear_filters();
        assert_eq!(cleared, QuerySpec::new().with_page_size(6));
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("popular".parse::<SortKey>(), Ok(SortKey::Popular));
        assert_eq!(" Rating ".parse::<SortKey>(), Ok(SortKey::Rating));
        assert_eq!(
            "cheapest".parse::<SortKey>(),
            Err(CatalogError::UnknownSortKey("cheapest".to_string()))
        );
        for key in SortKey::VARIANTS {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }

    #[test]
    fn test_deserialize_partial_spec() {
        let spec: QuerySpec =
            serde_json::from_str(r#"{"category": "design", "sort": "duration"}"#).unwrap();
        assert_eq!(spec.category, "design");
        assert_eq!(spec.sort, SortKey::Duration);
        assert_eq!(spec.difficulty, ALL);
        assert_eq!(spec.page_size, DEFAULT_PAGE_SIZE);
    }
}
