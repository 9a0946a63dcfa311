//! CLI execution context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use storee_sdk::storee_commerce::store::AnyCatalog;
use storee_sdk::storee_commerce::storefront::Storefront;
use storee_sdk::storee_commerce::whatsapp::WhatsAppLink;
use storee_sdk::storee_core::{RequestId, SiteConfig};
use storee_sdk::storee_data::{ReqwestTransport, TableClient};
use storee_sdk::storee_observability::{LogFormat, LogLevel, StructuredLogger};

use crate::config::find_config;
use crate::output::Output;

/// Timeout for each request to the table store.
const STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Execution context for CLI commands.
pub struct Context {
    /// Defaults, then the config file, then `STOREE_*` variables.
    pub config: SiteConfig,
    /// The file the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from the given config file, or the nearest `storee.toml`.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => find_config(&cwd),
        };

        let mut config = match &config_path {
            Some(path) => SiteConfig::load(&path.to_string_lossy())?,
            None => SiteConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Logger for store reads and fallbacks: human-readable on stderr,
    /// warnings only unless `--verbose`.
    pub fn logger(&self) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        StructuredLogger::new(RequestId::generate())
            .with_workload("storee-cli")
            .with_min_level(level)
            .with_format(LogFormat::Human)
    }

    pub fn transport(&self) -> Result<ReqwestTransport> {
        ReqwestTransport::new(STORE_TIMEOUT).context("Failed to create HTTP client")
    }

    /// Catalog reads: the configured store, or demo data when there is none.
    pub fn storefront(&self) -> Result<Storefront<AnyCatalog<ReqwestTransport>>> {
        let catalog = AnyCatalog::from_config(&self.config, self.transport()?);
        if !catalog.is_remote() {
            self.output.debug("No store configured, reading the demo catalog");
        }
        Ok(Storefront::new(catalog, self.logger()))
    }

    /// Client authenticated with the service key, for writes.
    pub fn service_client(&self) -> Result<TableClient<ReqwestTransport>> {
        let url = self
            .config
            .store
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .context("store.url is not set (config file or STOREE_STORE_URL)")?;
        let key = self
            .config
            .store
            .service_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .context("store.service_key is not set (config file or STOREE_SERVICE_KEY)")?;
        Ok(TableClient::new(url, key, self.transport()?))
    }

    pub fn whatsapp(&self) -> WhatsAppLink {
        WhatsAppLink::from_config(&self.config)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
