//! The interactive shopping session.
//!
//! Owns the session and cart for its lifetime: the cart is created when
//! the session starts, mutated only through the `CartStore` handle, and
//! discarded when the shopper leaves. Confirmation toasts and structured
//! logs are both driven by cart events, so the core never knows how they
//! are rendered.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use dialoguer::{Confirm, Input, Select};
use maison_commerce::prelude::*;
use maison_observability::{LogFormat, LogLevel, StructuredLogger};

use super::ShopArgs;
use crate::commands::browse::render_listing;
use crate::commands::show::render_detail;
use crate::context::Context;
use crate::output::Output;
use crate::rotator::HeroRotator;

/// Run the shop command.
pub async fn run(_args: ShopArgs, ctx: &Context) -> Result<()> {
    let session = ShopSession::start();
    let logger = StructuredLogger::new(session.id().as_str())
        .with_page("shop")
        .with_format(LogFormat::Human)
        .with_min_level(if ctx.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        });

    let cart = session.cart().clone();
    cart.register_observer(Arc::new(ToastNotifier {
        output: ctx.output.clone(),
    }));
    cart.register_observer(Arc::new(CartLogObserver {
        logger: logger.clone(),
    }));

    let hero = ctx.catalog.featured(ctx.config.display.hero_count);
    let mut rotator = HeroRotator::start(
        hero.len(),
        Duration::from_secs(ctx.config.display.hero_interval_secs),
    );

    ctx.output.header(&ctx.config.store.name);
    ctx.output.info(&ctx.config.store.tagline);
    logger.debug("session started");

    let mut subscribers = SubscriberList::new();

    loop {
        if let Some(product) = hero.get(rotator.current()) {
            ctx.output.info("");
            ctx.output
                .info(&format!("Now featuring: {} at {}", product.name, product.price));
        }

        let badge = match cart.total_items() {
            0 => String::new(),
            n => format!(" ({} item{})", n, if n == 1 { "" } else { "s" }),
        };

        let actions = [
            "Browse products",
            "Search",
            "View a product / add to cart",
            "View cart",
            "Update quantity",
            "Remove item",
            "Clear cart",
            "Newsletter signup",
            "Checkout",
            "Leave the store",
        ];
        let selection = Select::new()
            .with_prompt(format!("Cart{}", badge))
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let products: Vec<&Product> = ctx.catalog.all().iter().collect();
                render_listing(&ctx.output, &products);
            }
            1 => search(ctx)?,
            2 => view_and_add(ctx, &cart)?,
            3 => view_cart(ctx, &cart)?,
            4 => update_quantity(ctx, &cart)?,
            5 => remove_item(ctx, &cart)?,
            6 => clear_cart(ctx, &cart)?,
            7 => newsletter_signup(ctx, &mut subscribers)?,
            8 => checkout(ctx, &cart)?,
            _ => break,
        }
    }

    // Tear down the hero view before the session goes away.
    rotator.stop();

    let final_cart = session.end();
    logger
        .debug_builder("session ended")
        .field_i64("items", final_cart.item_count())
        .emit();
    if !final_cart.is_empty() {
        ctx.output.info(&format!(
            "Left with {} item(s) in the cart. Carts do not survive the session.",
            final_cart.item_count()
        ));
    }
    ctx.output.success("Thanks for visiting!");

    Ok(())
}

fn search(ctx: &Context) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search for products")
        .allow_empty(true)
        .interact_text()?;

    let results = ctx.catalog.search(&query);
    let trimmed = query.trim();

    if trimmed.is_empty() {
        render_listing(&ctx.output, &results);
    } else if results.is_empty() {
        ctx.output
            .warn(&format!("No products found matching \"{}\"", trimmed));
    } else {
        ctx.output.info(&format!(
            "Found {} product{} matching \"{}\"",
            results.len(),
            if results.len() == 1 { "" } else { "s" },
            trimmed
        ));
        render_listing(&ctx.output, &results);
    }
    Ok(())
}

fn view_and_add(ctx: &Context, cart: &CartStore) -> Result<()> {
    let products = ctx.catalog.all();
    if products.is_empty() {
        ctx.output.warn("The catalog is empty.");
        return Ok(());
    }

    let items: Vec<String> = products
        .iter()
        .map(|p| format!("{} ({})", p.name, p.price))
        .collect();
    let selection = Select::new()
        .with_prompt("Pick a product")
        .items(&items)
        .default(0)
        .interact()?;
    let product = &products[selection];

    render_detail(ctx, product);

    if !Confirm::new()
        .with_prompt("Add to cart?")
        .default(true)
        .interact()?
    {
        return Ok(());
    }

    let color = if product.has_color_choices() {
        let choice = Select::new()
            .with_prompt("Color")
            .items(&product.available_colors)
            .default(0)
            .interact()?;
        Some(product.available_colors[choice].clone())
    } else {
        None
    };

    let size = if product.has_size_choices() {
        let choice = Select::new()
            .with_prompt("Size")
            .items(&product.available_sizes)
            .default(0)
            .interact()?;
        Some(product.available_sizes[choice].clone())
    } else {
        None
    };

    // The confirmation toast arrives through the observer.
    if let Err(e) = cart.add_to_cart(product, color.as_deref(), size.as_deref()) {
        ctx.output.error(&e.to_string());
    }
    Ok(())
}

fn view_cart(ctx: &Context, cart: &CartStore) -> Result<()> {
    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    render_cart(ctx, &snapshot)?;
    Ok(())
}

fn render_cart(ctx: &Context, snapshot: &Cart) -> Result<()> {
    const WIDTHS: [usize; 4] = [26, 30, 6, 14];

    ctx.output.header("Your cart");
    ctx.output
        .table_row(&["PRODUCT", "VARIANT", "QTY", "TOTAL"], &WIDTHS);
    ctx.output.info(&"-".repeat(84));

    for line in snapshot.lines() {
        let variant = format!("{} / {}", line.key.color, line.key.size);
        let total = snapshot.line_total(line, &ctx.catalog)?;
        ctx.output.table_row(
            &[
                &line.product_name,
                &variant,
                &line.quantity.to_string(),
                &total.display(),
            ],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output
        .kv("Items", &snapshot.item_count().to_string());
    ctx.output.kv(
        "Total",
        &snapshot.total_price(&ctx.catalog)?.display(),
    );
    Ok(())
}

/// Pick a line from the cart, or None when the cart is empty.
fn pick_line(output: &Output, snapshot: &Cart, prompt: &str) -> Result<Option<LineKey>> {
    if snapshot.is_empty() {
        output.info("Your cart is empty.");
        return Ok(None);
    }

    let items: Vec<String> = snapshot
        .lines()
        .iter()
        .map(|l| {
            format!(
                "{} ({} / {}) x{}",
                l.product_name, l.key.color, l.key.size, l.quantity
            )
        })
        .collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(snapshot.lines()[selection].key.clone()))
}

fn update_quantity(ctx: &Context, cart: &CartStore) -> Result<()> {
    let Some(key) = pick_line(&ctx.output, &cart.snapshot(), "Which line?")? else {
        return Ok(());
    };

    // Dialoguer re-prompts on non-numeric input, so the core only ever
    // sees integers.
    let quantity: i64 = Input::new()
        .with_prompt("New quantity (0 removes the line)")
        .interact_text()?;

    if let Err(e) = cart.update_quantity(&key, quantity) {
        ctx.output.error(&e.to_string());
    }
    Ok(())
}

fn remove_item(ctx: &Context, cart: &CartStore) -> Result<()> {
    let Some(key) = pick_line(&ctx.output, &cart.snapshot(), "Remove which line?")? else {
        return Ok(());
    };
    cart.remove_from_cart(&key);
    Ok(())
}

fn clear_cart(ctx: &Context, cart: &CartStore) -> Result<()> {
    if cart.is_empty() {
        ctx.output.info("Your cart is already empty.");
        return Ok(());
    }
    if Confirm::new()
        .with_prompt("Remove everything from the cart?")
        .default(false)
        .interact()?
    {
        cart.clear();
    }
    Ok(())
}

fn newsletter_signup(ctx: &Context, subscribers: &mut SubscriberList) -> Result<()> {
    let email: String = Input::new()
        .with_prompt("Email address")
        .interact_text()?;

    match subscribers.subscribe(&email) {
        Ok(SubscribeOutcome::Subscribed) => ctx
            .output
            .success("Thanks for subscribing! Check your inbox for confirmation."),
        Ok(SubscribeOutcome::AlreadySubscribed) => {
            ctx.output.info("You're already on the list.")
        }
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

fn checkout(ctx: &Context, cart: &CartStore) -> Result<()> {
    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        ctx.output.warn("Your cart is empty. Add something first.");
        return Ok(());
    }

    let spinner = ctx.output.spinner("Preparing your order summary...");
    let total = snapshot.total_price(&ctx.catalog)?;
    spinner.finish_and_clear();

    render_cart(ctx, &snapshot)?;
    ctx.output.info("");
    ctx.output.kv(
        "Summary generated",
        &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    if Confirm::new()
        .with_prompt(format!("Check out for {}?", total.display()))
        .default(true)
        .interact()?
    {
        // Payment is somebody else's department; checkout here means
        // handing the summary over and starting fresh.
        cart.clear();
        ctx.output.success("Order summary complete. Your cart has been cleared.");
    }
    Ok(())
}

/// Turns cart events into visible confirmation toasts.
struct ToastNotifier {
    output: Output,
}

impl CartObserver for ToastNotifier {
    fn on_event(&self, event: &CartEvent) {
        match event {
            CartEvent::LineAdded { line } if line.first_add => self.output.success(&format!(
                "Added to cart: {} ({} / {})",
                line.product_name, line.key.color, line.key.size
            )),
            CartEvent::LineAdded { line } => self.output.success(&format!(
                "{} is now x{} in your cart",
                line.product_name, line.quantity
            )),
            CartEvent::LineRemoved { key } => {
                self.output.info(&format!("Removed {}", key));
            }
            CartEvent::QuantityUpdated { key, quantity } => {
                self.output.info(&format!("Set {} to x{}", key, quantity));
            }
            CartEvent::Cleared => self.output.info("Cart cleared."),
        }
    }
}

/// Logs cart events with structured fields.
struct CartLogObserver {
    logger: StructuredLogger,
}

impl CartObserver for CartLogObserver {
    fn on_event(&self, event: &CartEvent) {
        match event {
            CartEvent::LineAdded { line } => self
                .logger
                .debug_builder("cart line added")
                .field("product_id", line.key.product_id.as_str())
                .field("color", line.key.color.as_str())
                .field("size", line.key.size.as_str())
                .field_i64("quantity", line.quantity)
                .field_bool("first_add", line.first_add)
                .emit(),
            CartEvent::LineRemoved { key } => self
                .logger
                .debug_builder("cart line removed")
                .field("product_id", key.product_id.as_str())
                .emit(),
            CartEvent::QuantityUpdated { key, quantity } => self
                .logger
                .debug_builder("cart quantity updated")
                .field("product_id", key.product_id.as_str())
                .field_i64("quantity", *quantity)
                .emit(),
            CartEvent::Cleared => self.logger.debug("cart cleared"),
        }
    }
}
