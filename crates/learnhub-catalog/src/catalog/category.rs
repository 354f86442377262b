//! Per-category rollups for the categories overview.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::format::format_rating;

/// Category shown in the spotlight when the catalog has it.
pub const FEATURED_CATEGORY: &str = "technology";

const DEFAULT_DESCRIPTION: &str = "Explore various learning opportunities";
const DEFAULT_ICON: &str = "fas fa-book";
const DEFAULT_HIGHLIGHT: &str = "Various expert-led learning opportunities";

/// Blurb for a category card.
pub fn category_description(id: &str) -> &'static str {
    match id {
        "technology" => "Web development, programming, and IT skills for the modern world",
        "cooking" => "Master culinary arts with recipes and techniques from professional chefs",
        "farming" => "Learn sustainable agriculture and modern farming practices",
        "cosmetics" => "Beauty, skincare, and professional makeup artistry techniques",
        "design" => "Creative design principles, UI/UX, and digital art mastery",
        "business" => "Entrepreneurship, marketing, and business management skills",
        _ => DEFAULT_DESCRIPTION,
    }
}

/// Icon class for a category.
pub fn category_icon(id: &str) -> &'static str {
    match id {
        "technology" => "fas fa-laptop-code",
        "cooking" => "fas fa-utensils",
        "farming" => "fas fa-tractor",
        "cosmetics" => "fas fa-spa",
        "design" => "fas fa-palette",
        "business" => "fas fa-chart-line",
        _ => DEFAULT_ICON,
    }
}

/// "Popular in ..." line for a category.
pub fn category_highlight(id: &str) -> &'static str {
    match id {
        "technology" => "Web development, programming, and cutting-edge IT skills",
        "cooking" => "Master recipes and techniques from world-class chefs",
        "farming" => "Sustainable practices and modern agricultural methods",
        "cosmetics" => "Professional beauty and skincare techniques",
        "design" => "Creative design principles and digital artistry",
        "business" => "Entrepreneurship and strategic business management",
        _ => DEFAULT_HIGHLIGHT,
    }
}

/// Aggregate view of one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Category id as it appears on items.
    pub id: String,
    /// Display name (first letter upper-cased).
    pub name: String,
    /// Number of tutorials in this category.
    pub count: usize,
    /// Sum of student counts.
    pub total_students: u64,
    /// Mean display rating. Unrated tutorials count as 4.5.
    pub average_rating: f64,
    pub description: String,
    pub icon: String,
    /// What the category's popular tutorials cover.
    pub highlight: String,
}

impl CategorySummary {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format_category_name(id),
            count: 0,
            total_students: 0,
            average_rating: 0.0,
            description: category_description(id).to_string(),
            icon: category_icon(id).to_string(),
            highlight: category_highlight(id).to_string(),
        }
    }

    /// Average rating rounded to one decimal for display.
    pub fn rating_label(&self) -> String {
        format_rating(self.average_rating)
    }

    /// Average rating as displayed, e.g. `4.25` becomes `4.3`.
    pub fn rounded_rating(&self) -> f64 {
        (self.average_rating * 10.0).round() / 10.0
    }
}

/// Catalog-wide totals for the categories overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_tutorials: usize,
    pub total_students: u64,
    /// Mean of the displayed per-category averages. 0 for an empty catalog.
    pub average_rating: f64,
}

impl CatalogStats {
    pub fn rating_label(&self) -> String {
        format_rating(self.average_rating)
    }
}

/// Roll category summaries up into catalog totals.
///
/// Each category counts once toward the average, whatever its size.
pub fn catalog_stats(summaries: &[CategorySummary]) -> CatalogStats {
    if summaries.is_empty() {
        return CatalogStats::default();
    }

    let total_tutorials = summaries.iter().map(|s| s.count).sum();
    let total_students = summaries
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.total_students));
    let rating_sum: f64 = summaries.iter().map(CategorySummary::rounded_rating).sum();

    CatalogStats {
        total_tutorials,
        total_students,
        average_rating: rating_sum / summaries.len() as f64,
    }
}

/// The spotlight category: [`FEATURED_CATEGORY`] if present, else the first.
pub fn featured_category(summaries: &[CategorySummary]) -> Option<&CategorySummary> {
    summaries
        .iter()
        .find(|s| s.id == FEATURED_CATEGORY)
        .or_else(|| summaries.first())
}

/// Group items by category, in the order categories first appear.
pub fn summarize_categories(items: &[CatalogItem]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut rating_sums: Vec<f64> = Vec::new();

    for item in items {
        let idx = match summaries.iter().position(|s| s.id == item.category) {
            Some(idx) => idx,
            None => {
                summaries.push(CategorySummary::new(&item.category));
                rating_sums.push(0.0);
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[idx];
        summary.count += 1;
        summary.total_students = summary.total_students.saturating_add(item.popularity_rank());
        rating_sums[idx] += item.display_rating();
    }

    for (summary, sum) in summaries.iter_mut().zip(rating_sums) {
        summary.average_rating = sum / summary.count as f64;
    }

    summaries
}

/// Upper-case the first character of a category id.
pub fn format_category_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
