//! API utilities for talking to the Refashion backend
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// The storefront is served from the same origin as the API gateway, so the
/// base is simply the current window location.
///
/// # Returns
/// - Base URL like "https://refashion.example" or "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// # let id = 42;
/// let url = api_url(&format!("/api/orders/{}", id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
