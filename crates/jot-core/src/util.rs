//! Shared utility functions used across multiple modules.

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Truncate text to at most 180 characters for error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Monotonic counter that collapses a burst of events down to the last one.
///
/// Each event bumps the counter and keeps the returned ticket. After a quiet
/// period, only the holder of the latest ticket should proceed; everyone else
/// drops their work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoalesceCounter(u64);

impl CoalesceCounter {
    /// Record a new event and return its ticket.
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `ticket` still identifies the most recent event.
    #[must_use]
    pub fn is_latest(self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" https://example.com ".to_string())),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn is_http_url_accepts_valid_schemes() {
        assert!(is_http_url("http://localhost"));
        assert!(is_http_url("https://example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("example.com"));
    }

    #[test]
    fn coalesce_counter_tracks_latest_ticket() {
        let mut counter = CoalesceCounter::default();
        let first = counter.bump();
        let second = counter.bump();
        assert!(!counter.is_latest(first));
        assert!(counter.is_latest(second));
    }
}
