//! Search the catalog.

use anyhow::Result;

use super::SearchArgs;
use crate::commands::browse::render_listing;
use crate::context::Context;

/// Run the search command.
///
/// The query arrives as plain strings from the command line; joining
/// and trimming is all the parsing the core expects from us.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = args.query.join(" ");
    let results = ctx.catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    let trimmed = query.trim();
    if trimmed.is_empty() {
        ctx.output.header("All products");
        render_listing(&ctx.output, &results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output
            .warn(&format!("No products found matching \"{}\"", trimmed));
        ctx.output.info("Run `maison browse` to see the full catalog.");
        return Ok(());
    }

    ctx.output.header("Search results");
    ctx.output.info(&format!(
        "Found {} product{} matching \"{}\"",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        trimmed
    ));
    ctx.output.info("");
    render_listing(&ctx.output, &results);

    Ok(())
}
