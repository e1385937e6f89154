//! Request handlers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

use super::state::AppState;
use super::types::{ApiError, InventoryQuery};

/// Inventory level lookup
///
/// GET /inventory-levels?variant_id=123&location_id=456
///
/// Validates parameter presence, then delegates to the two-step upstream
/// lookup. The success body is the upstream inventory-levels payload,
/// forwarded unchanged.
pub async fn get_inventory_levels(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some((variant_id, location_id)) = query.validated() else {
        return Err(ApiError::MissingParameter);
    };

    let payload = state
        .shopify
        .inventory_levels(variant_id, location_id)
        .await?;

    Ok(Json(payload))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(json!({ "status": "ok", "timestamp_ms": now_ms }))
}
