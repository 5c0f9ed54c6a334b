//! Common test utilities and helpers
//!
//! - Mock SSR render server helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod mock_server;

// Re-export commonly used utilities
pub use assertions::*;
pub use mock_server::*;

use inertia_responder::shared::{Inertia, InertiaConfig};

/// A handle rendering through the SSR server at `server`
pub fn inertia_with_ssr(server: &str) -> Inertia {
    Inertia::new(InertiaConfig::builder().ssr_server(server).build())
}

/// A handle with SSR switched off
pub fn inertia_without_ssr() -> Inertia {
    Inertia::new(InertiaConfig::builder().ssr_enabled(false).build())
}
