//! Observability for the Shahed Storee storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Per-request structured logging (JSON or human)
//! - `LogLevel` / `LogFormat` - Parsed from site configuration

mod logging;

pub use logging::*;

// Re-export RequestId and TimingContext from storee-core for convenience
pub use storee_core::{RequestId, TimingContext};
