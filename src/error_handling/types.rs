//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for trust store operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Reasons a command-line URL is rejected before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing but whitespace was given.
    #[error("URL is empty")]
    Empty,

    /// Input exceeds [`MAX_URL_LENGTH`](crate::config::MAX_URL_LENGTH).
    #[error("URL exceeds maximum length ({len} > {max})")]
    TooLong { len: usize, max: usize },

    /// The `url` crate could not parse the input.
    #[error("Invalid URL: {0}")]
    Invalid(#[from] url::ParseError),

    /// Only http and https are resolved.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The URL parsed but names no host.
    #[error("URL has no host")]
    MissingHost,
}

/// Transport failure categories, used for the diagnostic line logged when a
/// resolution ends in a network error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum NetworkErrorKind {
    Builder,
    Connect,
    Timeout,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NetworkErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkErrorKind::Builder => "HTTP request builder error",
            NetworkErrorKind::Connect => "HTTP connect error",
            NetworkErrorKind::Timeout => "HTTP timeout",
            NetworkErrorKind::Request => "HTTP request error",
            NetworkErrorKind::Body => "HTTP body error",
            NetworkErrorKind::Decode => "HTTP decode error",
            NetworkErrorKind::Other => "HTTP other error",
        }
    }
}
