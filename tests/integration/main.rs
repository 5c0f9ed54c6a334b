//! Integration tests for the Inertia responder

#[path = "../common/mod.rs"]
mod common;

mod render_test;
mod ssr_test;
