//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{EnumIter as EnumIterMacro, IntoStaticStr};
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

    /// The production HTTP client was created outside a Tokio runtime.
    #[error("Tokio runtime unavailable: {0}")]
    RuntimeUnavailableError(#[from] tokio::runtime::TryCurrentError),
}

/// Errors reported to callers of `RemoteFeedLoader::load`.
///
/// These are the only two categories a caller ever sees. Transport and
/// decoder diagnostics are logged, never returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RemoteFeedLoaderError {
    /// The HTTP exchange never completed (DNS, connect, TLS, timeout, body read).
    #[error("connectivity error: the feed request did not complete")]
    Connectivity,

    /// The exchange completed but the status or body failed validation.
    #[error("invalid data: the feed response failed validation")]
    InvalidData,
}

/// Categories of transport failures.
///
/// A transport failure means the HTTP exchange could not complete. A response
/// with any status code, including 4xx and 5xx, is a completed exchange and is
/// never reported with one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// Request could not be built (e.g. unsupported URL scheme)
    Builder,
    /// Redirect policy violated (e.g. too many hops)
    Redirect,
    /// Request or connect timeout elapsed
    Timeout,
    /// DNS, TCP or TLS failure while connecting
    Connect,
    /// Request failed after the connection was established
    Request,
    /// Connection dropped while reading the body
    Body,
    /// Response body could not be decoded by the transport
    Decode,
    /// Anything reqwest does not categorize
    Other,
}

impl TransportErrorKind {
    /// Returns a human-readable string representation of the transport error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "HTTP request builder error",
            TransportErrorKind::Redirect => "HTTP request redirect error",
            TransportErrorKind::Timeout => "HTTP request timeout error",
            TransportErrorKind::Connect => "HTTP request connect error",
            TransportErrorKind::Request => "HTTP request error",
            TransportErrorKind::Body => "HTTP response body error",
            TransportErrorKind::Decode => "HTTP response decode error",
            TransportErrorKind::Other => "HTTP transport error",
        }
    }
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure reported by an `HttpClient` when the exchange could not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
}

impl TransportError {
    /// Creates a transport error of the given kind.
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The category of this failure.
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// The transport's own description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_feed_loader_error_labels() {
        let connectivity: &'static str = RemoteFeedLoaderError::Connectivity.into();
        let invalid_data: &'static str = RemoteFeedLoaderError::InvalidData.into();
        assert_eq!(connectivity, "connectivity");
        assert_eq!(invalid_data, "invalid_data");
    }

    #[test]
    fn test_remote_feed_loader_error_display_hides_details() {
        let message = RemoteFeedLoaderError::Connectivity.to_string();
        assert_eq!(message, "connectivity error: the feed request did not complete");
    }

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::new(TransportErrorKind::Connect, "connection refused");
        assert_eq!(
            error.to_string(),
            "HTTP request connect error: connection refused"
        );
        assert_eq!(error.kind(), TransportErrorKind::Connect);
        assert_eq!(error.message(), "connection refused");
    }

    #[test]
    fn test_transport_error_kind_display_matches_as_str() {
        use strum::IntoEnumIterator;
        for kind in TransportErrorKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
