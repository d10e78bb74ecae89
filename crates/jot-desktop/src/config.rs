//! Desktop configuration read from the environment.

use jot_core::api::normalize_base_url;
use jot_core::util::normalize_text_option;

/// Base URL used when the environment does not provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the API base URL.
const API_BASE_URL_ENV: &str = "JOT_API_BASE_URL";

/// Client configuration for the notes API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// An unset, empty, or invalid `JOT_API_BASE_URL` falls back to
    /// [`DEFAULT_API_BASE_URL`] so the app can always start.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_BASE_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let Some(raw) = normalize_text_option(value) else {
            return Self {
                base_url: DEFAULT_API_BASE_URL.to_string(),
            };
        };
        match normalize_base_url(&raw) {
            Ok(base_url) => Self { base_url },
            Err(error) => {
                tracing::warn!("Ignoring invalid {API_BASE_URL_ENV}: {error}");
                Self {
                    base_url: DEFAULT_API_BASE_URL.to_string(),
                }
            }
        }
    }

    /// The normalized API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_the_default() {
        let config = ApiConfig::from_value(None);
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);

        let blank = ApiConfig::from_value(Some("   ".to_string()));
        assert_eq!(blank.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn valid_value_is_normalized() {
        let config = ApiConfig::from_value(Some(" https://notes.example.com/api/ ".to_string()));
        assert_eq!(config.base_url(), "https://notes.example.com/api");
    }

    #[test]
    fn invalid_value_falls_back_to_the_default() {
        let config = ApiConfig::from_value(Some("ftp://example.com/api".to_string()));
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
    }
}
