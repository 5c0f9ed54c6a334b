//! Property-based tests for the Inertia responder

mod page_proptest;
