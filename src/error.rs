//! Error types for swapi-catalog
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Callers usually care about the broad [`ErrorCategory`] rather than the
//! concrete variant: transport failures, pagination contract violations,
//! missing items, and local configuration problems.

use crate::types::{ResourceId, ResourceKind};
use thiserror::Error;

/// The main error type for swapi-catalog
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unknown resource kind: {name}")]
    UnknownResource { name: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("No {kind} with id {id}")]
    NotFound { kind: ResourceKind, id: ResourceId },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network or HTTP layer failure
    Transport,
    /// Server response violates the pagination or payload contract
    Protocol,
    /// Single-item lookup found no such id
    NotFound,
    /// Local configuration or usage problem
    Config,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(kind: ResourceKind, id: ResourceId) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create an unknown resource error
    pub fn unknown_resource(name: impl Into<String>) -> Self {
        Self::UnknownResource { name: name.into() }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. } => {
                ErrorCategory::Transport
            }
            Error::Protocol { .. } | Error::JsonParse(_) => ErrorCategory::Protocol,
            Error::NotFound { .. } => ErrorCategory::NotFound,
            Error::Config { .. }
            | Error::YamlParse(_)
            | Error::Io(_)
            | Error::InvalidUrl(_)
            | Error::UnknownResource { .. }
            | Error::Other(_) => ErrorCategory::Config,
        }
    }

    /// Check if this is a transport failure
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// Check if this is a protocol violation
    pub fn is_protocol(&self) -> bool {
        self.category() == ErrorCategory::Protocol
    }

    /// Check if this is a missing item
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

/// Result type alias for swapi-catalog
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::http_status(500, "boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");

        let err = Error::not_found(ResourceKind::Person, 9999);
        assert_eq!(err.to_string(), "No person with id 9999");
    }

    #[test]
    fn test_categories() {
        assert!(Error::http_status(503, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 10 }.is_transport());
        assert!(Error::protocol("missing next").is_protocol());
        assert!(Error::not_found(ResourceKind::Film, 1).is_not_found());
        assert_eq!(
            Error::unknown_resource("droids").category(),
            ErrorCategory::Config
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(Error::from(json_err).is_protocol());
    }

    #[test]
    fn test_not_found_is_not_transport() {
        let err = Error::not_found(ResourceKind::Planet, 7);
        assert!(!err.is_transport());
        assert!(!err.is_protocol());
    }
}
