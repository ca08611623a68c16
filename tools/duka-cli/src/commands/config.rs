//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[catalog]");
    match &config.catalog.file {
        Some(file) => ctx.output.kv("file", file),
        None => {
            ctx.output.kv(
                "base_url",
                config.catalog.base_url.as_deref().unwrap_or("(none)"),
            );
            ctx.output.kv("path", &config.catalog.path);
        }
    }
    if let Some(ms) = config.catalog.timeout_ms {
        ctx.output.kv("timeout_ms", &ms.to_string());
    }

    ctx.output.info("[storage]");
    ctx.output.kv("path", &ctx.cart_path().display().to_string());
    ctx.output.kv("key", &config.storage.key);

    ctx.output.info("[display]");
    ctx.output.kv("toast_ms", &config.display.toast_ms.to_string());
    ctx.output
        .kv("recommendations", &config.display.recommendations.to_string());

    ctx.output.info("[log]");
    ctx.output.kv("level", &config.log.level);
    ctx.output.kv("format", &config.log.format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
