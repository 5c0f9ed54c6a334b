//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs       - Module exports and documentation
//! ├── router.rs    - Demo router creation
//! └── shorthand.rs - Routes rendering a fixed component
//! ```

/// Main router creation
pub mod router;

/// Shorthand component routes
pub mod shorthand;

// Re-export commonly used functions
pub use router::create_router;
pub use shorthand::inertia_route;
