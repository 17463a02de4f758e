//! Show a product's detail view.

use anyhow::Result;
use maison_commerce::catalog::Product;
use maison_commerce::ids::ProductId;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id.as_str());

    let Some(product) = ctx.catalog.find_by_id(&id) else {
        // Not-found affordance, not a crash.
        ctx.output.warn(&format!("Product not found: {}", args.id));
        ctx.output.info("Run `maison browse` to see available products.");
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    render_detail(ctx, product);
    Ok(())
}

/// Render the detail view. Shared with the interactive session.
pub(crate) fn render_detail(ctx: &Context, product: &Product) {
    ctx.output.header(&product.name);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Description", product.detail_text());
    ctx.output.kv("Specification", &product.spec);
    ctx.output.kv("Image", &product.image);

    if product.has_color_choices() {
        ctx.output
            .kv("Colors", &product.available_colors.join(", "));
    } else {
        ctx.output.kv("Color", &product.color);
    }

    if product.has_size_choices() {
        ctx.output.kv("Sizes", &product.available_sizes.join(", "));
    }
}
