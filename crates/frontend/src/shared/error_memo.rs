//! Short-lived memo of failed GET requests.
//!
//! While a URL has a fresh failure recorded, repeated GETs return the cached
//! message instead of hitting the backend again. A success or a forced
//! refresh evicts the entry.

use std::cell::RefCell;
use std::collections::HashMap;

/// How long a failure stays memoized
pub const ERROR_TTL_MS: i64 = 5 * 60 * 1000;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    message: String,
    expires_at: i64,
}

/// Failures keyed by URL; times are epoch milliseconds
#[derive(Debug, Default)]
pub struct ErrorMemo {
    entries: HashMap<String, Entry>,
    ttl_ms: i64,
}

impl ErrorMemo {
    pub fn new(ttl_ms: i64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms,
        }
    }

    /// Cached failure for `url`, purging expired entries first
    pub fn check(&mut self, url: &str, now: i64) -> Option<String> {
        self.purge(now);
        self.entries.get(url).map(|e| e.message.clone())
    }

    pub fn record(&mut self, url: &str, message: &str, now: i64) {
        self.entries.insert(
            url.to_string(),
            Entry {
                message: message.to_string(),
                expires_at: now + self.ttl_ms,
            },
        );
    }

    pub fn evict(&mut self, url: &str) {
        self.entries.remove(url);
    }

    pub fn purge(&mut self, now: i64) {
        self.entries.retain(|_, e| e.expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decision before a GET: `Some(message)` short-circuits with the cached
    /// failure. A forced request clears the entry and always goes out.
    pub fn before_request(&mut self, url: &str, force: bool, now: i64) -> Option<String> {
        if force {
            self.evict(url);
            return None;
        }
        self.check(url, now)
    }

    /// Success evicts, failure is (re)recorded
    pub fn after_request(&mut self, url: &str, outcome: Result<(), &str>, now: i64) {
        match outcome {
            Ok(()) => self.evict(url),
            Err(message) => self.record(url, message, now),
        }
    }
}

thread_local! {
    static MEMO: RefCell<ErrorMemo> = RefCell::new(ErrorMemo::new(ERROR_TTL_MS));
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn before_request(url: &str, force: bool) -> Option<String> {
    MEMO.with(|m| m.borrow_mut().before_request(url, force, now_ms()))
}

pub fn after_request(url: &str, outcome: Result<(), &str>) {
    MEMO.with(|m| m.borrow_mut().after_request(url, outcome, now_ms()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memoized_until_ttl() {
        let mut memo = ErrorMemo::new(1000);
        memo.record("/api/zonas", "HTTP 500: boom", 10_000);
        assert_eq!(memo.check("/api/zonas", 10_500), Some("HTTP 500: boom".to_string()));
        assert_eq!(memo.check("/api/tarifas", 10_500), None);
        assert_eq!(memo.check("/api/zonas", 11_000), None);
        assert!(memo.is_empty());
    }

    #[test]
    fn test_evict() {
        let mut memo = ErrorMemo::new(ERROR_TTL_MS);
        memo.record("/api/zonas", "caído", 0);
        memo.record("/api/tarifas", "caído", 0);
        memo.evict("/api/zonas");
        assert_eq!(memo.check("/api/zonas", 1), None);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_record_again_extends() {
        let mut memo = ErrorMemo::new(1000);
        memo.record("/api/zonas", "primero", 0);
        memo.record("/api/zonas", "segundo", 800);
        assert_eq!(memo.check("/api/zonas", 1500), Some("segundo".to_string()));
    }

    #[test]
    fn test_purge_only_expired() {
        let mut memo = ErrorMemo::new(1000);
        memo.record("a", "x", 0);
        memo.record("b", "y", 500);
        memo.purge(1200);
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.check("b", 1200), Some("y".to_string()));
    }

    #[test]
    fn test_cached_failure_skips_request() {
        let mut memo = ErrorMemo::new(1000);
        assert_eq!(memo.before_request("/api/zonas", false, 0), None);
        memo.after_request("/api/zonas", Err("HTTP 503"), 0);
        assert_eq!(
            memo.before_request("/api/zonas", false, 500),
            Some("HTTP 503".to_string())
        );
        assert_eq!(memo.before_request("/api/zonas", false, 1000), None);
    }

    #[test]
    fn test_forced_request_clears_failure() {
        let mut memo = ErrorMemo::new(ERROR_TTL_MS);
        memo.after_request("/api/tarifas", Err("Error de conexión"), 0);
        assert_eq!(memo.before_request("/api/tarifas", true, 1), None);
        assert!(memo.is_empty());
        assert_eq!(memo.before_request("/api/tarifas", false, 2), None);
    }

    #[test]
    fn test_success_evicts_failure() {
        let mut memo = ErrorMemo::new(ERROR_TTL_MS);
        memo.after_request("/api/zonas", Err("HTTP 500"), 0);
        memo.after_request("/api/tarifas", Err("HTTP 500"), 0);
        memo.after_request("/api/zonas", Ok(()), 10);
        assert_eq!(memo.before_request("/api/zonas", false, 20), None);
        assert_eq!(memo.len(), 1);
    }
}
