//! Category overview.

use anyhow::Result;
use learnhub_catalog::catalog::{catalog_stats, featured_category, CatalogStats, CategorySummary};
use learnhub_catalog::format::format_number;
use serde::Serialize;

use super::CategoriesArgs;
use crate::context::Context;

const WIDTHS: [usize; 5] = [16, 20, 10, 10, 8];

/// JSON shape of the categories command.
#[derive(Serialize)]
struct CategoriesReport<'a> {
    stats: CatalogStats,
    featured: Option<&'a CategorySummary>,
    categories: &'a [CategorySummary],
}

/// Run the categories command.
pub fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.load_catalog()?;
    let categories = engine.categories();
    let stats = catalog_stats(&categories);
    let featured = featured_category(&categories);

    if ctx.output.is_json() {
        ctx.output.json(&CategoriesReport {
            stats,
            featured,
            categories: &categories,
        });
        return Ok(());
    }

    ctx.output.header(&format!("{} Categories", categories.len()));
    ctx.output.kv("Tutorials", &format!("{}+", stats.total_tutorials));
    ctx.output.kv("Students", &format!("{}+", format_number(stats.total_students)));
    ctx.output.kv("Rating", &stats.rating_label());

    let Some(featured) = featured else {
        ctx.output.line("");
        ctx.output.info("No categories found");
        return Ok(());
    };

    ctx.output.header(&format!("Featured: {}", featured.name));
    ctx.output.line(&format!("  {}", featured.description));
    ctx.output.kv(
        "Stats",
        &format!(
            "{} tutorials, {}+ students, {}/5",
            featured.count,
            format_number(featured.total_students),
            featured.rating_label()
        ),
    );
    ctx.output.kv("Explore", &format!("learnhub query --category {}", featured.id));

    ctx.output.line("");
    ctx.output
        .table_row(&["CATEGORY", "ICON", "TUTORIALS", "STUDENTS", "RATING"], &WIDTHS);
    ctx.output
        .table_row(&["────────", "────", "─────────", "────────", "──────"], &WIDTHS);

    for category in &categories {
        let count = category.count.to_string();
        let students = format_number(category.total_students);
        let rating = category.rating_label();
        ctx.output.table_row(
            &[&category.name, &category.icon, &count, &students, &rating],
            &WIDTHS,
        );
    }

    ctx.output.line("");
    for category in &categories {
        ctx.output.list_item(&format!("{}: {}", category.name, category.description));
        ctx.output.line(&format!("      Popular: {}", category.highlight));
    }

    Ok(())
}
