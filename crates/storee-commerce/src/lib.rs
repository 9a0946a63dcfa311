//! Storefront domain for Shahed Storee.
//!
//! This crate provides the types and logic behind every page:
//!
//! - **Catalog**: Products, categories, variant options, images
//! - **Pricing**: Variant selection and the displayed total
//! - **Listing**: Shop filters and sort order, applied remotely or locally
//! - **Storefront**: Remote reads with the demo catalog as fallback
//! - **WhatsApp**: Order and contact deep links
//! - **Content**: Site copy, FAQs and policies
//!
//! # Example
//!
//! ```rust,ignore
//! use storee_commerce::prelude::*;
//!
//! let shop = Storefront::new(OfflineCatalog, logger);
//! let detail = shop.product("sahara-modular-sofa").await;
//!
//! let groups = group_variants(&detail.variants);
//! let selection = Selection::new().with("Size", "3-Seater");
//! let total = total_price(detail.product.price_sar, &detail.variants, &selection);
//! println!("Total: {}", total.display());
//!
//! let order = OrderRequest::new(&detail.product.name, &detail.product.material, &selection, Some("Jeddah"));
//! println!("{}", WhatsAppLink::from_config(&config).order_url(&order));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod content;
pub mod demo;
pub mod format;
pub mod listing;
pub mod pricing;
pub mod seed;
pub mod store;
pub mod storefront;
pub mod whatsapp;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Money, CURRENCY_CODE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{group_variants, Category, Product, ProductImage, VariantGroup, VariantOption};

    // Pricing
    pub use crate::pricing::{total_price, PriceBreakdown, Selection};

    // Listing
    pub use crate::listing::{materials, CatalogQuery, SortOption};

    // Reads
    pub use crate::store::{AnyCatalog, CatalogSource, OfflineCatalog, RemoteCatalog};
    pub use crate::storefront::{Listing, ProductDetail, Storefront};

    // Ordering
    pub use crate::whatsapp::{ContactRequest, OrderRequest, WhatsAppLink};
}
