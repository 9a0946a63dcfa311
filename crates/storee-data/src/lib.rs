//! Data access for the hosted table store.
//!
//! This crate provides:
//! - `TableQuery` - Equality/inequality filters, ordering and limits rendered as a REST path
//! - `Transport` - The outbound HTTP seam (Spin, reqwest or in-memory)
//! - `TableClient` - Authenticated reads and upserts of JSON rows
//! - `FetchError` - Everything that can go wrong on the way

mod client;
mod query;
mod transport;

pub use client::*;
pub use query::*;
pub use transport::*;
