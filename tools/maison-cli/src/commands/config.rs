//! Configuration management.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set { key, value } => set(&key, &value, ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    ctx.output.kv("store.name", &ctx.config.store.name);
    ctx.output.kv("store.tagline", &ctx.config.store.tagline);
    ctx.output.kv(
        "catalog.path",
        ctx.config.catalog.path.as_deref().unwrap_or("(embedded)"),
    );
    ctx.output.kv(
        "display.featured_count",
        &ctx.config.display.featured_count.to_string(),
    );
    ctx.output.kv(
        "display.hero_count",
        &ctx.config.display.hero_count.to_string(),
    );
    ctx.output.kv(
        "display.hero_interval_secs",
        &ctx.config.display.hero_interval_secs.to_string(),
    );

    Ok(())
}

fn set(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();

    match key {
        "store.name" => config.store.name = value.to_string(),
        "store.tagline" => config.store.tagline = value.to_string(),
        "catalog.path" => {
            config.catalog.path = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        "display.featured_count" => config.display.featured_count = value.parse()?,
        "display.hero_count" => config.display.hero_count = value.parse()?,
        "display.hero_interval_secs" => config.display.hero_interval_secs = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    let path = ctx.default_config_path();
    config.save(path.to_str().unwrap_or("maison.toml"))?;
    ctx.output
        .success(&format!("Set {} = {} in {}", key, value, path.display()));

    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.list_item("maison browse");
    ctx.output.list_item("maison search <query>");
    ctx.output.list_item("maison shop");

    Ok(())
}
