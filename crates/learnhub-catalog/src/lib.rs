//! Tutorial catalog types and query engine for LearnHub.
//!
//! This crate provides:
//!
//! - **Catalog**: Tutorial records, duration parsing, category rollups
//! - **Search**: Query specs, filters, and the load-more query engine
//! - **Format**: Display helpers for counts, ratings and result headers
//!
//! # Example
//!
//! ```rust
//! use learnhub_catalog::prelude::*;
//!
//! let engine = CatalogQueryEngine::from_json(r#"[
//!     {"id": 1, "title": "HTML Basics", "category": "technology", "duration": "2h"},
//!     {"id": 2, "title": "Bread Making", "category": "cooking", "duration": "45m"}
//! ]"#).unwrap();
//!
//! let spec = QuerySpec::new()
//!     .with_category("technology")
//!     .with_sort(SortKey::Newest)
//!     .with_page_size(12);
//!
//! let result = engine.query(&spec);
//! assert_eq!(result.total, 1);
//! assert!(!result.has_more);
//! ```

pub mod error;
pub mod format;
pub mod ids;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ItemId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ItemId;

    // Catalog
    pub use crate::catalog::{
        catalog_stats, featured_category, format_duration, parse_duration, summarize_categories,
        CatalogItem, CatalogStats, CategorySummary, Difficulty, DifficultyLevel,
    };

    // Search
    pub use crate::search::{
        query, ActiveFilter, CatalogQueryEngine, Filter, FilterKind, QueryResult, QuerySpec,
        SortKey,
    };

    // Format
    pub use crate::format::{count_label, format_number, format_rating};
}
