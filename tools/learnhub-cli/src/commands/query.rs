//! Filter, sort and page the catalog.

use anyhow::{Context as _, Result};
use learnhub_catalog::catalog::format_duration;
use learnhub_catalog::format::{format_number, format_rating};
use learnhub_catalog::search::{QueryResult, QuerySpec, SortKey, ALL};
use learnhub_observability::MetricsCollector;

use super::QueryArgs;
use crate::config::CliConfig;
use crate::context::Context;

const WIDTHS: [usize; 7] = [6, 32, 12, 12, 8, 6, 8];

/// Run the query command.
pub fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let spec = build_spec(&args, &ctx.config)?;
    let engine = ctx.load_catalog()?;

    let mut metrics = MetricsCollector::new(ctx.logger.run_id().clone());
    let timer = metrics.start(describe(&spec));
    let result = engine.query(&spec);
    metrics.finish(timer, engine.len(), result.total, result.len());

    if let Some(recorded) = metrics.queries().last() {
        ctx.logger
            .debug_builder("query finished")
            .field("spec", recorded.label.clone())
            .field_u64("matched", recorded.matched as u64)
            .field_u64("shown", recorded.shown as u64)
            .field_u64("duration_us", recorded.duration_us)
            .emit();
    }

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    ctx.output.header(&engine.count_label(&result));

    let chips: Vec<String> = spec
        .active_filters()
        .into_iter()
        .map(|filter| filter.label)
        .collect();
    if !chips.is_empty() {
        ctx.output.kv("Filters", &chips.join(", "));
    }
    ctx.output.kv("Sort", spec.sort.display_name());

    if result.is_empty() {
        ctx.output.line("");
        ctx.output.warn("No tutorials found");
        ctx.output.info("Try adjusting your search or filters");
        return Ok(());
    }

    print_table(&result, ctx);

    if result.has_more {
        ctx.output.line("");
        ctx.output.info(&format!(
            "Showing {} of {}. Run again with --pages {} to load more.",
            result.len(),
            result.total,
            spec.pages_requested.saturating_add(1)
        ));
    }

    ctx.output
        .debug(&format!("Query took {}us", metrics.summary().total_duration_us));

    Ok(())
}

/// Merge command-line options over the config defaults.
///
/// The spec is assembled field by field so that a page size or page count of
/// zero reaches `validate` instead of being clamped.
pub fn build_spec(args: &QueryArgs, config: &CliConfig) -> Result<QuerySpec> {
    let sort_name = args.sort.as_deref().unwrap_or(&config.query.sort);
    let sort: SortKey = sort_name
        .parse()
        .with_context(|| format!("Invalid --sort value '{}'", sort_name))?;

    let spec = QuerySpec {
        search_text: args.search.clone().unwrap_or_default(),
        category: args.category.clone().unwrap_or_else(|| ALL.to_string()),
        difficulty: args.difficulty.clone().unwrap_or_else(|| ALL.to_string()),
        sort,
        page_size: args.page_size.unwrap_or(config.query.page_size),
        pages_requested: args.pages,
    };

    spec.validate().context("Invalid query")?;
    Ok(spec)
}

/// Short label for metrics records.
fn describe(spec: &QuerySpec) -> String {
    let mut parts: Vec<String> = spec
        .active_filters()
        .into_iter()
        .map(|filter| format!("{}={}", filter.kind.as_str(), filter.value))
        .collect();
    parts.push(format!("sort={}", spec.sort));
    parts.push(format!("limit={}", spec.limit()));
    parts.join(" ")
}

fn print_table(result: &QueryResult<'_>, ctx: &Context) {
    ctx.output.line("");
    ctx.output.table_row(
        &["ID", "TITLE", "CATEGORY", "LEVEL", "DURATION", "RATING", "STUDENTS"],
        &WIDTHS,
    );
    ctx.output.table_row(
        &["──", "─────", "────────", "─────", "────────", "──────", "────────"],
        &WIDTHS,
    );

    for item in &result.page {
        let id = item.id.to_string();
        let duration = format_duration(item.duration_minutes);
        let rating = format_rating(item.display_rating());
        let students = format_number(item.popularity_rank());
        ctx.output.table_row(
            &[
                &id,
                &item.title,
                &item.category,
                item.difficulty.as_str(),
                &duration,
                &rating,
                &students,
            ],
            &WIDTHS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> QueryArgs {
        QueryArgs {
            pages: 1,
            ..QueryArgs::default()
        }
    }

    #[test]
    fn test_config_defaults_apply() {
        let mut config = CliConfig::default();
        config.query.sort = "popular".to_string();
        config.query.page_size = 6;

        let spec = build_spec(&args(), &config).unwrap();
        assert_eq!(spec.sort, SortKey::Popular);
        assert_eq!(spec.page_size, 6);
        assert_eq!(spec.category, ALL);
        assert_eq!(spec.difficulty, ALL);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.query.sort = "popular".to_string();

        let spec = build_spec(
            &QueryArgs {
                search: Some("bread".to_string()),
                category: Some("cooking".to_string()),
                sort: Some("duration".to_string()),
                page_size: Some(4),
                pages: 2,
                ..QueryArgs::default()
            },
            &config,
        )
        .unwrap();

        assert_eq!(spec.sort, SortKey::Duration);
        assert_eq!(spec.search_text, "bread");
        assert_eq!(spec.category, "cooking");
        assert_eq!(spec.limit(), 8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig::default();

        let bad_sort = QueryArgs {
            sort: Some("cheapest".to_string()),
            ..args()
        };
        assert!(build_spec(&bad_sort, &config).is_err());

        let zero_pages = QueryArgs { pages: 0, ..args() };
        assert!(build_spec(&zero_pages, &config).is_err());

        let zero_size = QueryArgs {
            page_size: Some(0),
            ..args()
        };
        assert!(build_spec(&zero_size, &config).is_err());
    }

    #[test]
    fn test_describe() {
        let spec = QuerySpec::new()
            .with_category("cooking")
            .with_sort(SortKey::Rating);
        assert_eq!(describe(&spec), "category=cooking sort=rating limit=12");
    }
}
