//! HTTP gateway: routing, CORS policy, and the serve loop.

pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::shopify::ShopifyClient;
use state::AppState;

/// Build the gateway router with its CORS policy.
///
/// Exposed separately from [`serve`] so tests can mount it on an ephemeral
/// listener with a client pointed at a mock upstream.
pub fn router(state: Arc<AppState>, allowed_origin: &str) -> Router {
    let cors = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!(allowed_origin, "unparsable CORS origin, falling back to permissive");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route("/inventory-levels", get(handlers::get_inventory_levels))
        .route("/health", get(handlers::health_check))
        .layer(cors)
        .with_state(state)
}

/// Start the gateway: build the upstream client and serve until shutdown.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let shopify = ShopifyClient::new(config.api_base_url(), config.access_token.clone())?;
    let state = Arc::new(AppState::new(shopify));
    let app = router(state, &config.allowed_origin);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, origin = %config.allowed_origin, "stockgate listening");

    axum::serve(listener, app).await?;
    Ok(())
}
