/**
 * Backend Error Types
 *
 * Errors raised while serving an Inertia response through axum.
 *
 * # Error Categories
 *
 * - `Inertia` - the response could not be built (lazy prop failure,
 *   serialization failure)
 * - `Task` - the blocking render task panicked or was cancelled
 *
 * Both surface to the client as a generic `500 Internal Server Error`.
 * SSR failures never reach this type; they fall back to static markup.
 */

use axum::http::StatusCode;
use thiserror::Error;
use crate::shared::InertiaError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from the responder core
    #[error(transparent)]
    Inertia(#[from] InertiaError),

    /// The blocking render task failed
    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// Every variant is a server-side failure.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Message sent to the client
    ///
    /// Details stay in the logs; the client only learns that rendering failed.
    pub fn message(&self) -> String {
        match self {
            Self::Inertia(_) | Self::Task(_) => "Internal Server Error".to_string(),
        }
    }
}
