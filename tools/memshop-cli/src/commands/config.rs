//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[shop]");
    ctx.output.kv("name", &ctx.config.shop.name);
    ctx.output.kv("currency", ctx.config.shop.currency.code());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_str());
    ctx.output.kv("format", ctx.config.logging.format.as_str());

    ctx.output.info("");
    ctx.output.info("[catalog]");
    if ctx.config.catalog.products.is_empty() {
        ctx.output.kv("products", "built-in");
    } else {
        for product in &ctx.config.catalog.products {
            ctx.output.list_item(&format!(
                "{} {} ({}, {})",
                product.id, product.name, product.price, product.category
            ));
        }
    }

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = ctx.config.shop.name.clone();
    if path.ends_with(".json") {
        let mut config = CliConfig::default();
        config.shop.name = name;
        config.save(&config_path.to_string_lossy())?;
    } else {
        std::fs::write(&config_path, generate_default_config(&name))?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.shop.name.trim().is_empty() {
        errors.push("shop.name is required".to_string());
    }

    if ctx.config_path.is_none() {
        warnings.push("no config file found; using defaults".to_string());
    }

    match ctx.config.build_catalog() {
        Ok(catalog) => {
            for section in catalog.sections() {
                ctx.output.debug(&format!(
                    "{}: {} product(s)",
                    section.category,
                    section.products.len()
                ));
            }
        }
        Err(e) => errors.push(format!("catalog: {}", e)),
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
