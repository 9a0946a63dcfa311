//! Single import for Shahed Storee workloads and tools.
//!
//! This crate re-exports the platform and storefront crates:
//!
//! ```ignore
//! use storee_sdk::prelude::*;
//!
//! let config = SiteConfig::from_env()?;
//! let logger = StructuredLogger::from_config(RequestId::generate(), &config)
//!     .with_workload("storefront");
//!
//! let shop = Storefront::new(AnyCatalog::from_config(&config, SpinTransport), logger);
//! let listing = shop.list(&CatalogQuery::from_params(&ctx.query)).await;
//!
//! sink.send_shell(&shell).await?;
//! sink.send_section("grid", &render_grid(&listing)).await?;
//! ```

pub use storee_commerce;
pub use storee_core;
pub use storee_data;
pub use storee_observability;
pub use storee_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use storee_commerce::prelude::*;
    pub use storee_core::*;
    pub use storee_data::*;
    pub use storee_observability::*;
    pub use storee_streaming::*;
}
