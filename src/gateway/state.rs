use crate::shopify::ShopifyClient;

/// Shared gateway state.
///
/// Nothing here is mutable across requests; the client clones share one
/// connection pool and the credential is fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub shopify: ShopifyClient,
}

impl AppState {
    pub fn new(shopify: ShopifyClient) -> Self {
        Self { shopify }
    }
}
