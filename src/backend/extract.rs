//! Request context extraction
//!
//! Any handler can take an [`InertiaContext`] argument as long as the
//! router state can hand out the [`Inertia`] handle. A fresh context is
//! built for every request.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::shared::{Inertia, InertiaContext, InertiaRequest};

impl<S> FromRequestParts<S> for InertiaContext
where
    S: Send + Sync,
    Inertia: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let inertia = Inertia::from_ref(state);
        Ok(inertia.context(request_from_parts(parts)))
    }
}

/// Convert axum request parts into responder request metadata
///
/// The visit URL is the path plus query string, as the client routes on it.
pub fn request_from_parts(parts: &Parts) -> InertiaRequest {
    let url = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    InertiaRequest::new(parts.method.clone(), url, parts.headers.clone())
}
