//! Search module.
//!
//! Contains query specs, filters, results and the query engine.

mod engine;
mod filter;
mod query;
mod results;

pub use engine::{query, CatalogQueryEngine};
pub use filter::{ActiveFilter, Filter, FilterKind};
pub use query::{QuerySpec, SortKey, ALL, DEFAULT_PAGE_SIZE};
pub use results::QueryResult;
