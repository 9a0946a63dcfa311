//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Input;
use storee_sdk::storee_core::{SiteConfig, DEFAULT_BRAND_NAME, DEFAULT_WHATSAPP_NUMBER};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, get_config_value, mask, set_config_value, validate, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force, yes } => init_config(force, yes, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

/// Secrets printed by `show`.
fn masked(config: &SiteConfig) -> SiteConfig {
    let mut shown = config.clone();
    shown.store.anon_key = shown.store.anon_key.as_deref().map(mask);
    shown.store.service_key = shown.store.service_key.as_deref().map(mask);
    shown
}

fn show_config(ctx: &Context) -> Result<()> {
    let shown = masked(&ctx.config);

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, defaults and environment)"),
    }
    ctx.output.kv("brand", &shown.brand);

    ctx.output.info("[whatsapp]");
    ctx.output.kv("number", &shown.whatsapp.number);

    ctx.output.info("[store]");
    let unset = "(unset)".to_string();
    ctx.output.kv("url", shown.store.url.as_ref().unwrap_or(&unset));
    ctx.output.kv("anon_key", shown.store.anon_key.as_ref().unwrap_or(&unset));
    ctx.output.kv("service_key", shown.store.service_key.as_ref().unwrap_or(&unset));
    ctx.output.kv(
        "mode",
        if ctx.config.is_store_configured() {
            "live"
        } else {
            "demo catalog"
        },
    );

    ctx.output.info("[log]");
    ctx.output.kv("level", &shown.log.level);
    ctx.output.kv("format", &shown.log.format);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value.unwrap_or_default());
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Run `storee config init` to create one.");
    };
    let path_str = path.to_string_lossy();

    // Start from the file alone so environment overrides are not written back.
    let mut config = SiteConfig::load(&path_str)?;
    set_config_value(&mut config, key, value)?;
    fs::write(path, config.to_toml()?)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ctx.output.success(&format!("Set {} in {}", key, path.display()));
    Ok(())
}

fn init_config(force: bool, yes: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let (number, brand) = if yes || ctx.output.is_json() {
        (DEFAULT_WHATSAPP_NUMBER.to_string(), DEFAULT_BRAND_NAME.to_string())
    } else {
        let number: String = Input::new()
            .with_prompt("WhatsApp number (international, digits only)")
            .default(DEFAULT_WHATSAPP_NUMBER.to_string())
            .interact_text()?;
        let brand: String = Input::new()
            .with_prompt("Brand name")
            .default(DEFAULT_BRAND_NAME.to_string())
            .interact_text()?;
        (number.chars().filter(|c| c.is_ascii_digit()).collect(), brand)
    };

    if number.is_empty() {
        bail!("WhatsApp number must contain digits");
    }

    fs::write(&config_path, generate_default_config(&number, &brand))
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let (errors, warnings) = validate(&ctx.config);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "errors": errors, "warnings": warnings }));
    } else {
        ctx.output.header("Validating configuration");
        for error in &errors {
            ctx.output.error(&format!("Error: {}", error));
        }
        for warning in &warnings {
            ctx.output.warn(&format!("Warning: {}", warning));
        }
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }
    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }
    Ok(())
}
