use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Upstream answered with a non-success status. The status code is
    /// forwarded verbatim to the original caller.
    #[error("Shopify API Error: {message}")]
    Upstream { status: u16, message: String },

    /// Upstream answered 2xx but the body violated its own contract
    /// (unparsable JSON, or a variant without an inventory item id).
    #[error("malformed Shopify response: {0}")]
    Malformed(String),

    /// Transport-level failure: DNS, connection, request build.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ShopifyError {
    fn from(err: reqwest::Error) -> Self {
        ShopifyError::Transport(err.to_string())
    }
}
