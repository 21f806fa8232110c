// ── Core error types ──
//
// User-facing errors from bookly-core. Consumers never see raw reqwest
// errors directly; the `From<bookly_api::Error>` impl translates every
// transport-layer failure into one of these variants before it reaches
// the status coordinator.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Local errors (raised before any network call) ────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Server errors ────────────────────────────────────────────────
    /// Non-success response from the API, already rendered to a
    /// human-readable message.
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Malformed server response: {message}")]
    Decode { message: String },
}

impl CoreError {
    /// Returns `true` for failures raised locally, before any network
    /// call was issued.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. } | Self::Config { .. })
    }

    /// Returns `true` if the server answered 404 for the target entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: Some(404), .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<bookly_api::Error> for CoreError {
    fn from(err: bookly_api::Error) -> Self {
        match err {
            bookly_api::Error::Api {
                status,
                status_text,
                body,
            } => {
                let message = if body.trim().is_empty() {
                    format!("HTTP {status} {status_text}")
                } else {
                    format!("HTTP {status} {status_text}: {body}")
                };
                CoreError::Api {
                    message,
                    status: Some(status),
                }
            }
            bookly_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e.url().map_or_else(|| "<unknown>".into(), |u| u.to_string()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            bookly_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            bookly_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_status_and_body_text() {
        let err = CoreError::from(bookly_api::Error::Api {
            status: 500,
            status_text: "Internal Server Error".into(),
            body: "boom".into(),
        });
        match err {
            CoreError::Api { message, status } => {
                assert_eq!(status, Some(500));
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let err = CoreError::from(bookly_api::Error::Api {
            status: 404,
            status_text: "Not Found".into(),
            body: String::new(),
        });
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn decode_error_translates() {
        let err = CoreError::from(bookly_api::Error::Deserialization {
            message: "expected value at line 1".into(),
            body: "not json".into(),
        });
        assert!(matches!(err, CoreError::Decode { .. }));
    }
}
