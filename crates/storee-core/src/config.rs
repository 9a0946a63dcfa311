//! Site configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default WhatsApp destination when none is configured.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "966500000000";

/// Default brand name used in page titles and messages.
pub const DEFAULT_BRAND_NAME: &str = "Shahed Storee";

/// Configuration for the storefront.
///
/// Layered as defaults, then an optional TOML file, then `STOREE_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Hosted table store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Messaging deep-link settings.
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,

    /// Brand name.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Hosted table store connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://xyz.supabase.co`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public (anon) API key, read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    /// Service key for seeding. Never shipped to the workload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Destination number in international format without `+`.
    #[serde(default = "default_number")]
    pub number: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            number: default_number(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level: trace, debug, info, warn, error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: json or human.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_brand() -> String {
    DEFAULT_BRAND_NAME.to_string()
}

fn default_number() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            whatsapp: WhatsAppConfig::default(),
            brand: default_brand(),
            log: LogConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse from TOML text.
    pub fn from_toml(path: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Load a TOML file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: "<memory>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load from the process environment on top of defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `STOREE_*` overrides from a lookup function.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("STOREE_STORE_URL") {
            self.store.url = Some(url.trim_end_matches('/').to_string());
        }
        if let Some(key) = non_empty("STOREE_STORE_KEY") {
            self.store.anon_key = Some(key);
        }
        if let Some(key) = non_empty("STOREE_SERVICE_KEY") {
            self.store.service_key = Some(key);
        }
        if let Some(number) = non_empty("STOREE_WHATSAPP_NUMBER") {
            let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "STOREE_WHATSAPP_NUMBER".to_string(),
                    value: number,
                });
            }
            self.whatsapp.number = digits;
        }
        if let Some(brand) = non_empty("STOREE_BRAND") {
            self.brand = brand;
        }
        if let Some(level) = non_empty("STOREE_LOG_LEVEL") {
            self.log.level = level.to_lowercase();
        }
        if let Some(format) = non_empty("STOREE_LOG_FORMAT") {
            self.log.format = format.to_lowercase();
        }

        Ok(())
    }

    /// Whether the hosted store can be queried; otherwise the site runs in demo mode.
    pub fn is_store_configured(&self) -> bool {
        self.store.url.as_deref().is_some_and(|u| !u.is_empty())
            && self.store.anon_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_demo_mode() {
        let config = SiteConfig::default();
        assert!(!config.is_store_configured());
        assert_eq!(config.whatsapp.number, DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(config.brand, "Shahed Storee");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SiteConfig::default();
        config
            .apply_env(env(&[
                ("STOREE_STORE_URL", "https://demo.supabase.co/"),
                ("STOREE_STORE_KEY", "anon"),
                ("STOREE_WHATSAPP_NUMBER", "+966 55 123 4567"),
                ("STOREE_LOG_LEVEL", "DEBUG"),
            ]))
            .unwrap();

        assert_eq!(config.store.url.as_deref(), Some("https://demo.supabase.co"));
        assert!(config.is_store_configured());
        assert_eq!(config.whatsapp.number, "966551234567");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = SiteConfig::default();
        config
            .apply_env(env(&[("STOREE_STORE_URL", "  ")]))
            .unwrap();
        assert!(config.store.url.is_none());
    }

    #[test]
    fn test_number_without_digits_is_rejected() {
        let mut config = SiteConfig::default();
        let err = config
            .apply_env(env(&[("STOREE_WHATSAPP_NUMBER", "none")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_toml_partial_file() {
        let config = SiteConfig::from_toml(
            "storee.toml",
            r#"
brand = "Test Store"

[store]
url = "https://x.supabase.co"
anon_key = "k"
"#,
        )
        .unwrap();
        assert_eq!(config.brand, "Test Store");
        assert!(config.is_store_configured());
        assert_eq!(config.log.format, "json");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SiteConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml("x", &text).unwrap(), config);
    }
}
