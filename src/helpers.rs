use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::PRODUCTION_API_URL;

static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Strictly increasing nonce in microseconds since the epoch.
pub(crate) fn next_nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);
    let mut last = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_NONCE.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Join path segments with `/`, dropping empty segments so an empty symbol
/// never leaves a doubled or trailing separator.
pub(crate) fn join_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BaseUrl {
    #[default]
    Production,
    Custom(String),
}

impl BaseUrl {
    /// Root of the REST API, always ending in `/`.
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Production => PRODUCTION_API_URL.to_string(),
            BaseUrl::Custom(url) if url.ends_with('/') => url.clone(),
            BaseUrl::Custom(url) => format!("{url}/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_collapses_empty_segments() {
        assert_eq!(join_path(&["orders", ""]), "orders");
        assert_eq!(join_path(&["orders", "", "hist"]), "orders/hist");
        assert_eq!(join_path(&["orders", "tBTCUSD", "hist"]), "orders/tBTCUSD/hist");
        assert_eq!(join_path(&["order", "cancel", "multi"]), "order/cancel/multi");
    }

    #[test]
    fn test_next_nonce_strictly_increases() {
        let mut prev = next_nonce();
        for _ in 0..1000 {
            let n = next_nonce();
            assert!(n > prev);
            prev = n;
        }
    }

    #[test]
    fn test_base_url_trailing_slash() {
        assert_eq!(BaseUrl::Production.get_url(), "https://api.bitfinex.com/v2/");
        assert_eq!(
            BaseUrl::Custom("http://localhost:8080/v2".to_string()).get_url(),
            "http://localhost:8080/v2/"
        );
        assert_eq!(
            BaseUrl::Custom("http://localhost:8080/v2/".to_string()).get_url(),
            "http://localhost:8080/v2/"
        );
    }
}
