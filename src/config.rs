use thiserror::Error;

/// Shopify Admin API version the gateway is pinned to.
///
/// Upstream paths and response shapes are versioned; bumping this is a
/// deliberate change, not configuration.
pub const SHOPIFY_API_VERSION: &str = "2025-01";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Process-wide configuration, read from the environment once at startup.
///
/// Read-only for the process lifetime; handed down by reference instead of
/// re-read from ambient globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Local listen port (`PORT`, default 3000)
    pub port: u16,
    /// Single allowed CORS origin (`SHOPIFY_SITE_URL`)
    pub allowed_origin: String,
    /// Upstream shop host, e.g. `my-shop.myshopify.com` (`SHOPIFY_STORE_DOMAIN`)
    pub store_domain: String,
    /// Static credential sent as `X-Shopify-Access-Token` (`SHOPIFY_ACCESS_TOKEN`)
    pub access_token: String,
    /// Tracing filter used when `RUST_LOG` is unset (`LOG_LEVEL`, default "info")
    pub log_level: String,
    /// Emit JSON-formatted logs (`LOG_JSON`, default false)
    pub use_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            allowed_origin: require("SHOPIFY_SITE_URL")?,
            store_domain: require("SHOPIFY_STORE_DOMAIN")?,
            access_token: require("SHOPIFY_ACCESS_TOKEN")?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            use_json: std::env::var("LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }

    /// Base URL for the pinned Admin API version, with trailing slash.
    pub fn api_base_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/",
            self.store_domain, SHOPIFY_API_VERSION
        )
    }

    /// Socket address string for the listener.
    pub fn socket_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> AppConfig {
        AppConfig {
            port: 3000,
            allowed_origin: "https://shop.example.com".to_string(),
            store_domain: "my-shop.myshopify.com".to_string(),
            access_token: "shpat_test".to_string(),
            log_level: "info".to_string(),
            use_json: false,
        }
    }

    #[test]
    fn test_api_base_url_pins_version() {
        let config = sample_config();
        assert_eq!(
            config.api_base_url(),
            format!(
                "https://my-shop.myshopify.com/admin/api/{}/",
                SHOPIFY_API_VERSION
            )
        );
    }

    #[test]
    fn test_socket_addr() {
        let mut config = sample_config();
        config.port = 8080;
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }
}
