//! Shahed Storee storefront.
//!
//! Every page is rendered on the server and streamed shell-first:
//! - Catalog reads fall back to the demo catalog
//! - Variant, area and gallery state travels in query parameters
//! - Orders and enquiries leave as WhatsApp deep links

mod pages;
mod sections;
mod styles;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use pages::{accepts_form, render_page, submit_contact, ContactOutcome, Page, Site};
pub use styles::STOREFRONT_STYLES;
