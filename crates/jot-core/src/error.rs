//! Error types for jot-core

use thiserror::Error;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jot-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Client or base URL configuration problem
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The server could not be reached at all (refused, DNS, no route)
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// The request failed in flight (timeout, dropped connection)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error (HTTP {status}): {}", message.as_deref().unwrap_or("no details"))]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Error message extracted from the response body, if any
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// OS secure storage error
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

impl Error {
    /// Whether the backend looks unreachable, which switches the app into
    /// demo mode instead of surfacing the failure.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// A message suitable for showing directly to the user.
    ///
    /// Server-provided messages are preferred for statuses where they tend to
    /// be actionable (400, 409, 422); the rest get a fixed description.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unreachable(_) | Self::Network(_) => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            Self::Api { status, message } => {
                let provided = message.as_deref().filter(|text| !text.trim().is_empty());
                match status {
                    400 => provided
                        .unwrap_or("Invalid request. Please check your input.")
                        .to_string(),
                    401 => "You are not authorized to perform this action.".to_string(),
                    403 => "You do not have permission to perform this action.".to_string(),
                    404 => "The requested note was not found.".to_string(),
                    409 => provided
                        .unwrap_or("A conflict occurred. Please try again.")
                        .to_string(),
                    422 => provided.unwrap_or("Invalid data provided.").to_string(),
                    500 => "An internal server error occurred. Please try again later.".to_string(),
                    502 | 503 | 504 => {
                        "The server is temporarily unavailable. Please try again later.".to_string()
                    }
                    _ => provided
                        .unwrap_or("An unexpected error occurred. Please try again.")
                        .to_string(),
                }
            }
            _ => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn connection_failures_share_one_user_message() {
        let refused = Error::Unreachable("connection refused".to_string());
        let timed_out = Error::Network("operation timed out".to_string());
        let expected = "Unable to connect to the server. Please check your internet connection.";
        assert_eq!(refused.user_message(), expected);
        assert_eq!(timed_out.user_message(), expected);
    }

    #[test]
    fn only_unreachable_triggers_demo_mode() {
        assert!(Error::Unreachable("refused".to_string()).is_unreachable());
        assert!(!Error::Network("timeout".to_string()).is_unreachable());
        assert!(!Error::Api {
            status: 500,
            message: None
        }
        .is_unreachable());
    }

    #[test]
    fn user_message_prefers_server_message_for_bad_request() {
        let error = Error::Api {
            status: 400,
            message: Some("Title is too long".to_string()),
        };
        assert_eq!(error.user_message(), "Title is too long");

        let blank = Error::Api {
            status: 400,
            message: Some("   ".to_string()),
        };
        assert_eq!(
            blank.user_message(),
            "Invalid request. Please check your input."
        );
    }

    #[test]
    fn user_message_ignores_server_message_for_auth_and_missing() {
        let unauthorized = Error::Api {
            status: 401,
            message: Some("token expired".to_string()),
        };
        assert_eq!(
            unauthorized.user_message(),
            "You are not authorized to perform this action."
        );

        let missing = Error::Api {
            status: 404,
            message: Some("no such row".to_string()),
        };
        assert_eq!(missing.user_message(), "The requested note was not found.");
    }

    #[test]
    fn user_message_covers_server_side_failures() {
        let internal = Error::Api {
            status: 500,
            message: Some("stack trace".to_string()),
        };
        assert_eq!(
            internal.user_message(),
            "An internal server error occurred. Please try again later."
        );

        for status in [502, 503, 504] {
            let error = Error::Api {
                status,
                message: None,
            };
            assert_eq!(
                error.user_message(),
                "The server is temporarily unavailable. Please try again later."
            );
        }
    }

    #[test]
    fn unknown_statuses_fall_back_to_generic_message() {
        let teapot = Error::Api {
            status: 418,
            message: None,
        };
        assert_eq!(
            teapot.user_message(),
            "An unexpected error occurred. Please try again."
        );

        let with_message = Error::Api {
            status: 418,
            message: Some("short and stout".to_string()),
        };
        assert_eq!(with_message.user_message(), "short and stout");
    }
}
