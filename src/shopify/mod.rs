//! Shopify Admin API client.
//!
//! The gateway's only upstream dependency. Both operations are read-only
//! lookups; nothing here mutates shop state.

pub mod client;
pub mod error;

pub use client::ShopifyClient;
pub use error::ShopifyError;
