//! Configuration helpers shared by the frontend and the backend.

/// Environment variable naming the sub-path the app is deployed under.
pub const BASE_URL_VAR: &str = "TALLY_BASE_URL";

/// Normalizes a base path to `/segment[/segment]`, `None` for the site root.
///
/// # Example
/// ```
/// use tally::config::normalize_base_path;
///
/// assert_eq!(normalize_base_path("/dashboard/"), Some("/dashboard".to_string()));
/// assert_eq!(normalize_base_path("/"), None);
/// ```
pub fn normalize_base_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}
