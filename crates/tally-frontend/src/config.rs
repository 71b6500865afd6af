//! Build-time configuration for the frontend.
//!
//! `TALLY_BASE_URL` is read when the bundle is compiled and roots both the
//! router and the mock API under a sub-path, e.g. `/dashboard`.

use tally::config::normalize_base_path;

/// Raw value of `TALLY_BASE_URL` at compile time.
pub const BASE_URL: Option<&str> = option_env!("TALLY_BASE_URL");

/// The base path the router is mounted at.
pub fn base_path() -> Option<String> {
    BASE_URL.and_then(normalize_base_path)
}

/// Root prepended to every API request path.
pub fn api_root() -> String {
    base_path().unwrap_or_default()
}
