//! Shared Module
//!
//! This module contains the host-independent core of the responder: prop
//! handling, page payload construction, SSR negotiation and the response
//! decision. Nothing in here depends on a particular web framework; the
//! host hands in an [`InertiaRequest`] and sends out the
//! [`InertiaResponse`] it gets back.
//!
//! # Overview
//!
//! - **`props`** - prop values, lazy props and the layered prop store
//! - **`page`** - page payload construction and partial reloads
//! - **`ssr`** - SSR render server client and per-request cache
//! - **`negotiator`** - JSON / version-mismatch / HTML decision
//! - **`context`** - process-wide handle and per-request state
//! - **`request`** - request metadata and protocol header names
//! - **`config`** - configuration and value providers
//! - **`error`** - error types

/// Prop values and the prop store
pub mod props;

/// Page payload construction
pub mod page;

/// SSR bridge
pub mod ssr;

/// Response negotiation
pub mod negotiator;

/// Responder handle and request context
pub mod context;

/// Request metadata
pub mod request;

/// Responder configuration
pub mod config;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, InertiaConfig, InertiaConfigBuilder, Provider};
pub use context::{Inertia, InertiaContext};
pub use error::InertiaError;
pub use negotiator::{InertiaResponse, Negotiation};
pub use page::InertiaPage;
pub use props::{InertiaProp, InertiaProps, LazyProp, PropStore};
pub use request::InertiaRequest;
pub use ssr::{HttpSsrClient, SsrClient, SsrError, SsrResponse};
