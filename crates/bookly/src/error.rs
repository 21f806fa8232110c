//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use bookly_core::CoreError;

/// Exit codes for scripting. Code 2 is clap's own usage-error exit.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const VALIDATION: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Validation failed: {message}")]
    #[diagnostic(
        code(bookly::validation),
        help(
            "Title and author are required, the date must be YYYY-MM-DD,\n\
             and the page count must be a positive number."
        )
    )]
    Validation { message: String },

    #[error("Book '{identifier}' not found")]
    #[diagnostic(
        code(bookly::not_found),
        help("List known books with: bookly list")
    )]
    NotFound { identifier: String },

    #[error("Book uid prefix '{identifier}' is ambiguous")]
    #[diagnostic(
        code(bookly::ambiguous),
        help("Give more of the uid; see: bookly list -o plain")
    )]
    Ambiguous { identifier: String },

    #[error("Could not reach the server at {url}")]
    #[diagnostic(
        code(bookly::connection_failed),
        help(
            "Check that the Bookly server is running and the base address\n\
             is right. Override it with --base-url or BOOKLY_BASE_URL."
        )
    )]
    Connection { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(bookly::timeout),
        help("The server did not answer in time. Raise --timeout if it is slow.")
    )]
    Timeout,

    #[error("{message}")]
    #[diagnostic(code(bookly::api))]
    Api { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(bookly::config),
        help("Inspect the resolved configuration with: bookly config show")
    )]
    Config { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(bookly::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => exit_code::VALIDATION,
            Self::NotFound { .. } | Self::Ambiguous { .. } => exit_code::NOT_FOUND,
            Self::Connection { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Api { .. } | Self::Config { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationFailed { message } => Self::Validation { message },
            CoreError::ConnectionFailed { url, reason } => Self::Connection { url, reason },
            CoreError::Timeout => Self::Timeout,
            CoreError::Api { message, .. } => Self::Api { message },
            CoreError::Decode { message } => Self::Api {
                message: format!("Malformed server response: {message}"),
            },
            CoreError::Config { message } => Self::Config { message },
        }
    }
}

impl From<bookly_config::ConfigError> for CliError {
    fn from(err: bookly_config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
