//! Shared Error Types
//!
//! This module defines the errors that can stop an Inertia response from
//! being produced. Soft failures (an unreachable SSR server, a malformed
//! render response) never show up here: the SSR bridge swallows them and
//! the caller falls back to the static container element.
//!
//! # Error Categories
//!
//! - `LazyProp` - a deferred prop producer failed while building the payload
//! - `Serialization` - the payload could not be encoded as JSON
//! - `Response` - the HTTP response could not be assembled
//! - `Config` - configuration could not be loaded
//!
//! # Usage
//!
//! ```rust
//! use inertia_responder::shared::error::InertiaError;
//!
//! let error = InertiaError::lazy_prop("stats", "database offline");
//! assert!(error.to_string().contains("stats"));
//! ```
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Boxed error returned by lazy prop producers
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that make an Inertia response impossible to construct
#[derive(Debug, Error)]
pub enum InertiaError {
    /// A lazy prop producer failed
    #[error("Lazy prop '{key}' could not be resolved: {source}")]
    LazyProp {
        /// Key of the prop whose producer failed
        key: String,
        /// The producer's own error
        #[source]
        source: BoxError,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP response could not be built
    #[error("Response error: {0}")]
    Response(#[from] http::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InertiaError {
    /// Create a new lazy prop error
    pub fn lazy_prop(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::LazyProp {
            key: key.into(),
            source: source.into(),
        }
    }
}
