//! Inertia Responder - Main Library
//!
//! Server side of the Inertia.js protocol. A page handler names a
//! client-side component and its props; at render time the responder
//! either answers with the JSON page payload (for visits made by the
//! Inertia client) or with HTML: markup pre-rendered by an external SSR
//! server, or a container element carrying the payload in `data-page`.
//!
//! # Module Structure
//!
//! - **`shared`** - Framework-independent core
//!   - Props, lazy props and shared props
//!   - Page payload and partial reloads
//!   - SSR bridge and response negotiation
//!   - Configuration and error types
//!
//! - **`backend`** - axum host glue (only compiled with the `server` feature)
//!   - Request context extractor
//!   - Response conversion and document templates
//!   - Shorthand routes and a demo server
//!
//! # Feature Flags
//!
//! - **`server`** - axum integration and the `inertia-demo-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use inertia_responder::shared::{Inertia, InertiaConfig, InertiaRequest, InertiaResponse};
//! use serde_json::json;
//!
//! let inertia = Inertia::new(InertiaConfig::builder().version("1.0").build());
//!
//! let mut ctx = inertia.context(InertiaRequest::get("/"));
//! ctx.set_component("Home");
//! ctx.set_props([("title", json!("Hi"))]);
//!
//! let head = ctx.head().unwrap();
//! match ctx.render().unwrap() {
//!     InertiaResponse::Html(body) => println!("<head>{head}</head><body>{body}</body>"),
//!     terminal => println!("{:?}", terminal.into_http().unwrap()),
//! }
//! ```
//!
//! # Thread Safety
//!
//! - `Inertia` is `Send + Sync` and meant to be cloned into every handler
//! - `InertiaContext` is `Send` but not `Sync`: one context per request

/// Framework-independent core
pub mod shared;

/// axum host glue
#[cfg(feature = "server")]
pub mod backend;
