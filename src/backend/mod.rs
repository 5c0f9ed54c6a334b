//! Backend Module
//!
//! axum host glue for the responder. Only compiled with the `server`
//! feature.
//!
//! # Overview
//!
//! - **`extract`** - `InertiaContext` as a request extractor
//! - **`response`** - turning a context into an HTTP response
//! - **`template`** - root document templates
//! - **`routes`** - shorthand routes and the demo router
//! - **`server`** - demo application state and initialization
//! - **`pages`** - demo page handlers
//! - **`error`** - backend error types
//!
//! # Request Flow
//!
//! 1. The `InertiaContext` extractor builds a fresh context from the
//!    request parts and the `Inertia` handle in the router state
//! 2. The handler sets the component and props
//! 3. `respond` renders on the blocking pool: Inertia visits get the JSON
//!    page (or a 409 on a stale version) with no template output; all
//!    other requests get the root template filled with the SSR head and
//!    body, or with the container element when SSR is unavailable
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{extract::State, routing::get, Router};
//! use inertia_responder::backend::{respond, template::SharedTemplate, BackendError};
//! use inertia_responder::shared::InertiaContext;
//!
//! async fn dashboard(
//!     mut ctx: InertiaContext,
//!     State(template): State<SharedTemplate>,
//! ) -> Result<axum::response::Response, BackendError> {
//!     ctx.set_component("Dashboard");
//!     respond(ctx, template).await
//! }
//! ```

/// Request context extractor
pub mod extract;

/// Response conversion
pub mod response;

/// Root document templates
pub mod template;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Demo page handlers
pub mod pages;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use response::respond;
pub use routes::inertia_route;
pub use server::{create_app, create_app_with};
pub use template::{DocumentTemplate, RootTemplate, SharedTemplate};
