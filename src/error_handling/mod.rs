//! Error types and transport error categorization.
//!
//! This module provides:
//! - The two-kind error taxonomy surfaced to feed callers
//! - Transport error definitions reported by `HttpClient` implementations
//! - Categorization of `reqwest` failures into transport error kinds
//! - Initialization errors for the logger, HTTP client, and runtime
//!
//! Everything below the loader boundary is a `TransportError`. The loader
//! collapses those into `RemoteFeedLoaderError::Connectivity`, and every
//! status/schema failure into `RemoteFeedLoaderError::InvalidData`.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, RemoteFeedLoaderError, TransportError, TransportErrorKind};
