//! Values that are either a literal or computed on use.

use std::fmt;
use std::sync::Arc;

/// A configuration value resolved each time it is read
///
/// The literal variant hands out a clone; the callback variant is invoked
/// on every `resolve()`.
pub enum Provider<T> {
    /// A fixed value
    Value(T),
    /// A zero-argument function producing the value
    Callback(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T: Clone> Provider<T> {
    /// Wrap a function as a provider
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Produce the current value
    pub fn resolve(&self) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Callback(f) => f(),
        }
    }
}

impl<T> From<T> for Provider<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Clone> Clone for Provider<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Callback(f) => Self::Callback(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
