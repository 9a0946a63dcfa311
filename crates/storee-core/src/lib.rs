//! Core abstractions for the Shahed Storee storefront.
//!
//! This crate provides the fundamental types shared by every page handler:
//! - `RequestContext` - Typed request parameters
//! - `Route` - The fixed page table of the site
//! - `SiteConfig` - Store, messaging and logging configuration
//! - `TimingContext` - Request lifecycle timing

mod config;
mod context;
mod error;
mod lifecycle;
mod route;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use route::*;
