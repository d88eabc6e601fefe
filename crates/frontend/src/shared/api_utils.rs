//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override of the backend address, e.g.
/// `ACME_API_BASE=https://tarifas.acme.com.ar trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("ACME_API_BASE");

/// Get the base URL for API requests
///
/// Uses `ACME_API_BASE` when it was set at build time, otherwise the current
/// window location with port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/zonas/3");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join base and path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// `?key=value&...` for the pairs that have a value; empty when none do
pub fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let parts: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3000", "/api/zonas"), "http://localhost:3000/api/zonas");
        assert_eq!(join_url("http://localhost:3000/", "/api/zonas"), "http://localhost:3000/api/zonas");
        assert_eq!(join_url("http://localhost:3000", "api/zonas"), "http://localhost:3000/api/zonas");
        assert_eq!(join_url("", "/api/zonas"), "/api/zonas");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(query_string(&[("desde", None), ("hasta", None)]), "");
        assert_eq!(
            query_string(&[
                ("desde", Some("2024-01-01".to_string())),
                ("hasta", None),
            ]),
            "?desde=2024-01-01"
        );
        assert_eq!(
            query_string(&[("q", Some("a b".to_string())), ("n", Some("1".to_string()))]),
            "?q=a%20b&n=1"
        );
    }
}
