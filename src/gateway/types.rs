//! Gateway request/response types and the error-to-response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::shopify::ShopifyError;

pub const MISSING_PARAMS_MSG: &str = "Missing Variant or Location ID parameters.";

/// Raw query parameters for `GET /inventory-levels`.
///
/// Both fields are optional at the deserialization layer so that presence
/// checks produce the fixed 400 message instead of an axum rejection.
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub variant_id: Option<String>,
    pub location_id: Option<String>,
}

impl InventoryQuery {
    /// Presence and non-emptiness check. `Some` means both parameters are
    /// usable; `None` is a terminal validation failure for the request.
    pub fn validated(&self) -> Option<(&str, &str)> {
        let variant_id = self.variant_id.as_deref().filter(|s| !s.is_empty())?;
        let location_id = self.location_id.as_deref().filter(|s| !s.is_empty())?;
        Some((variant_id, location_id))
    }
}

/// Caller-facing failure, mapped once at the handler boundary.
///
/// Every variant serializes as `{"error": "<message>"}` with the status
/// code fixed per variant (upstream failures forward the upstream status
/// verbatim).
#[derive(Debug)]
pub enum ApiError {
    /// `variant_id` or `location_id` missing/empty; no upstream call made.
    MissingParameter,
    /// An upstream call answered non-2xx; status forwarded verbatim.
    Upstream { status: u16, message: String },
    /// Upstream 2xx with a body violating its contract.
    MalformedUpstream(String),
    /// Transport or other unexpected failure.
    Internal(String),
}

impl From<ShopifyError> for ApiError {
    fn from(err: ShopifyError) -> Self {
        match err {
            ShopifyError::Upstream { status, message } => ApiError::Upstream {
                status,
                message: format!("Shopify API Error: {message}"),
            },
            ShopifyError::Malformed(message) => ApiError::MalformedUpstream(message),
            ShopifyError::Transport(message) => ApiError::Internal(message),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::MalformedUpstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::MissingParameter => MISSING_PARAMS_MSG,
            ApiError::Upstream { message, .. } => message,
            ApiError::MalformedUpstream(message) => message,
            ApiError::Internal(message) => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
