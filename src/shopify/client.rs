//! Dependent two-step inventory lookup against the Shopify Admin API.
//!
//! Step 1 resolves a variant to its inventory item; step 2 fetches the
//! inventory level for that item at the requested location. The second call
//! cannot start before the first completes - its input is the first call's
//! output. No retries, no caching; each request re-resolves from scratch.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::error::ShopifyError;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the Shopify Admin REST API.
///
/// Holds one connection-pooling `reqwest::Client`; cloning is cheap and
/// shares the pool. No explicit timeout is configured - transport defaults
/// apply.
#[derive(Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

/// Variant read response. Only `inventory_item_id` is consumed.
#[derive(Deserialize)]
struct VariantEnvelope {
    variant: Option<VariantRecord>,
}

#[derive(Deserialize)]
struct VariantRecord {
    inventory_item_id: Option<u64>,
}

impl ShopifyClient {
    /// `base_url` must end with a trailing slash, e.g.
    /// `https://shop.myshopify.com/admin/api/2025-01/`.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ShopifyError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ShopifyError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            access_token: access_token.into(),
        })
    }

    /// Resolve the inventory-level payload for a variant at a location.
    ///
    /// Returns the upstream inventory-levels body unchanged; any reshaping
    /// is the caller's problem by design of this gateway.
    pub async fn inventory_levels(
        &self,
        variant_id: &str,
        location_id: &str,
    ) -> Result<Value, ShopifyError> {
        let inventory_item_id = self.resolve_inventory_item(variant_id).await?;
        self.levels_for_item(inventory_item_id, location_id).await
    }

    /// Step 1: variant -> inventory item id.
    async fn resolve_inventory_item(&self, variant_id: &str) -> Result<u64, ShopifyError> {
        let url = format!("{}variants/{}.json", self.base_url, variant_id);
        let response = self
            .http
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("variant", response).await);
        }

        let envelope: VariantEnvelope = response
            .json()
            .await
            .map_err(|e| ShopifyError::Malformed(format!("variant response: {e}")))?;

        // Fail fast on a 2xx body without the id rather than forwarding a
        // sentinel value into the second call.
        envelope
            .variant
            .and_then(|v| v.inventory_item_id)
            .ok_or_else(|| {
                ShopifyError::Malformed(format!(
                    "variant {variant_id} response missing inventory_item_id"
                ))
            })
    }

    /// Step 2: (inventory item, location) -> inventory level payload.
    async fn levels_for_item(
        &self,
        inventory_item_id: u64,
        location_id: &str,
    ) -> Result<Value, ShopifyError> {
        let url = format!("{}inventory_levels.json", self.base_url);
        let response = self
            .http
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .query(&[
                ("inventory_item_ids", inventory_item_id.to_string().as_str()),
                ("location_ids", location_id),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error("inventory_levels", response).await);
        }

        debug!(inventory_item_id, location_id, "inventory level resolved");

        response
            .json()
            .await
            .map_err(|e| ShopifyError::Malformed(format!("inventory_levels response: {e}")))
    }
}

/// Capture a non-success upstream response as an error, logging the body
/// for operator visibility before discarding it.
async fn upstream_error(call: &str, response: reqwest::Response) -> ShopifyError {
    let status = response.status();
    let reason = status
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string();
    let body = response.text().await.unwrap_or_default();

    error!(
        call,
        status = status.as_u16(),
        %reason,
        %body,
        "Shopify API error"
    );

    ShopifyError::Upstream {
        status: status.as_u16(),
        message: reason,
    }
}
