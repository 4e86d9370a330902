//! Shared cache-control policies for HTTP handlers.

use actix_web::http::header::{CACHE_CONTROL, HeaderName};

/// Responses carrying account data are never stored by intermediaries.
pub const NO_STORE: &str = "no-store";

/// Cache-control header tuple for account and health check responses.
pub fn no_store_header() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, NO_STORE)
}
