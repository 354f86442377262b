//! Tutorial detail view.

use anyhow::Result;
use learnhub_catalog::catalog::{format_category_name, format_duration};
use learnhub_catalog::format::{format_number, format_rating};
use learnhub_catalog::ItemId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::difficulty_badge;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.load_catalog()?;
    let item = engine.get(&ItemId::from(args.id.as_str()))?;

    if ctx.output.is_json() {
        ctx.output.json(item);
        return Ok(());
    }

    match item.icon.as_deref() {
        Some(icon) => ctx.output.header(&format!("{} {}", icon, item.title)),
        None => ctx.output.header(&item.title),
    }

    ctx.output.kv("ID", &item.id.to_string());
    ctx.output.kv("Category", &format_category_name(&item.category));
    ctx.output.kv("Level", &difficulty_badge(item.difficulty.as_str()));
    ctx.output.kv("Duration", &format_duration(item.duration_minutes));
    ctx.output.kv("Rating", &format_rating(item.display_rating()));
    ctx.output.kv("Students", &format_number(item.popularity_rank()));

    ctx.output.header("About");
    ctx.output.line(item.full_description());

    ctx.output.header("What you'll learn");
    for objective in item.learning_objectives() {
        ctx.output.list_item(&objective);
    }

    ctx.output.header("Prerequisites");
    ctx.output.line(item.prerequisites());

    Ok(())
}
