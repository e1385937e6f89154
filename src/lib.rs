//! stockgate - Shopify inventory-level gateway
//!
//! A stateless request-translation proxy: one HTTP endpoint resolves a
//! `(variant_id, location_id)` pair into the current inventory level by
//! chaining two read calls against the Shopify Admin REST API
//! (variant -> inventory item -> inventory level).
//!
//! # Modules
//!
//! - [`config`] - Environment-provided configuration, loaded once at startup
//! - [`logging`] - tracing subscriber setup
//! - [`gateway`] - HTTP surface (routing, CORS, handlers, error mapping)
//! - [`shopify`] - Upstream client performing the dependent two-step lookup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod shopify;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError};
pub use shopify::{ShopifyClient, ShopifyError};
