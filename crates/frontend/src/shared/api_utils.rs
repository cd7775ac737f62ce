//! API utilities for frontend-backend communication
//!
//! The form talks to an external backend on port 3000 of the host that
//! served the page.

const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
