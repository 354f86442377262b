//! Tutorial catalog module.
//!
//! Contains the catalog record type, duration parsing and category rollups.

mod category;
mod duration;
mod item;
mod lenient;

pub use category::{
    catalog_stats, category_description, category_highlight, category_icon, featured_category,
    format_category_name, summarize_categories, CatalogStats, CategorySummary, FEATURED_CATEGORY,
};
pub use duration::{format_duration, parse_duration};
pub use item::{
    CatalogItem, Difficulty, DifficultyLevel, DEFAULT_PREREQUISITES, DISPLAY_RATING_DEFAULT,
};
