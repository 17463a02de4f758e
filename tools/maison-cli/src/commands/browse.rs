//! List the product catalog.

use anyhow::Result;
use maison_commerce::catalog::Product;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let products: Vec<&Product> = match args.featured {
        Some(n) => ctx.catalog.featured(n).iter().collect(),
        None => ctx.catalog.all().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&ctx.config.store.name);
    render_listing(&ctx.output, &products);
    ctx.output.info("");
    ctx.output
        .info(&format!("{} product(s) in the catalog", products.len()));

    Ok(())
}

/// Render a product listing table. Shared with the interactive session.
pub(crate) fn render_listing(output: &Output, products: &[&Product]) {
    if products.is_empty() {
        output.info("No products to show.");
        return;
    }

    output.table_row(&["ID", "NAME", "PRICE", "COLORS", "SIZES"], &COLUMN_WIDTHS);
    output.info(&"-".repeat(100));

    for product in products {
        let colors = product.available_colors.join(", ");
        let sizes = if product.available_sizes.is_empty() {
            product.spec.clone()
        } else {
            product.available_sizes.join(", ")
        };
        output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.price.display(),
                &colors,
                &sizes,
            ],
            &COLUMN_WIDTHS,
        );
    }
}

const COLUMN_WIDTHS: [usize; 5] = [22, 24, 14, 26, 24];
