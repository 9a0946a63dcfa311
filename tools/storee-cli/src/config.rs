//! Config file discovery and editing for `storee.toml`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use storee_sdk::storee_core::SiteConfig;

/// File names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 2] = ["storee.toml", ".storee.toml"];

/// Nearest config file in `start` or one of its parents.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Keys `config get` and `config set` understand.
pub const KEYS: [&str; 7] = [
    "store.url",
    "store.anon_key",
    "store.service_key",
    "whatsapp.number",
    "brand",
    "log.level",
    "log.format",
];

/// Show at most the first four characters of a secret.
pub fn mask(secret: &str) -> String {
    if secret.len() <= 4 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}****", prefix)
}

pub fn get_config_value(config: &SiteConfig, key: &str) -> Result<Option<String>> {
    let value = match key {
        "store.url" => config.store.url.clone(),
        "store.anon_key" => config.store.anon_key.clone(),
        "store.service_key" => config.store.service_key.clone(),
        "whatsapp.number" => Some(config.whatsapp.number.clone()),
        "brand" => Some(config.brand.clone()),
        "log.level" => Some(config.log.level.clone()),
        "log.format" => Some(config.log.format.clone()),
        _ => bail!("Unknown config key: {} (expected one of {})", key, KEYS.join(", ")),
    };
    Ok(value)
}

pub fn set_config_value(config: &mut SiteConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "store.url" => config.store.url = Some(value.trim_end_matches('/').to_string()),
        "store.anon_key" => config.store.anon_key = Some(value.to_string()),
        "store.service_key" => config.store.service_key = Some(value.to_string()),
        "whatsapp.number" => {
            let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                bail!("whatsapp.number must contain digits");
            }
            config.whatsapp.number = digits;
        }
        "brand" => config.brand = value.to_string(),
        "log.level" => config.log.level = value.to_lowercase(),
        "log.format" => config.log.format = value.to_lowercase(),
        _ => bail!("Unknown config key: {}", key),
    }
    Ok(())
}

/// Problems that stop the site or the CLI from working as configured.
pub fn validate(config: &SiteConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match (&config.store.url, &config.store.anon_key) {
        (Some(url), _) if !url.starts_with("https://") && !url.starts_with("http://") => {
            errors.push(format!("store.url '{}' is not an http(s) URL", url));
        }
        (Some(_), None) => errors.push("store.url is set but store.anon_key is not".to_string()),
        (None, Some(_)) => errors.push("store.anon_key is set but store.url is not".to_string()),
        (None, None) => warnings.push("no store configured, the site serves the demo catalog".to_string()),
        _ => {}
    }

    if config.whatsapp.number.is_empty() || !config.whatsapp.number.chars().all(|c| c.is_ascii_digit()) {
        errors.push("whatsapp.number must be digits only".to_string());
    }
    if config.brand.trim().is_empty() {
        errors.push("brand must not be empty".to_string());
    }
    if !["trace", "debug", "info", "warn", "error"].contains(&config.log.level.as_str()) {
        warnings.push(format!("log.level '{}' is unknown, info is used", config.log.level));
    }
    if !["json", "human"].contains(&config.log.format.as_str()) {
        warnings.push(format!("log.format '{}' is unknown, json is used", config.log.format));
    }

    (errors, warnings)
}

/// A commented `storee.toml` for `config init`.
pub fn generate_default_config(number: &str, brand: &str) -> String {
    format!(
        r#"# Shahed Storee configuration
#
# Every value can be overridden by STOREE_* environment variables.

brand = "{brand}"

[whatsapp]
# International format, digits only.
number = "{number}"

[store]
# Leave unset to run on the demo catalog.
# url = "https://your-project.supabase.co"
# anon_key = "public-anon-key"
# service_key = "service-role-key, only needed by `storee seed`"

[log]
level = "info"
format = "json"
"#,
        brand = brand.replace('"', "\\\""),
        number = number,
    )
}
