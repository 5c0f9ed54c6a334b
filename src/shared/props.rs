//! Props and the prop store
//!
//! A prop is either a plain JSON value or a lazy producer evaluated only
//! when the prop ends up in the payload. The [`PropStore`] keeps the three
//! prop layers of a response apart until the payload is built:
//!
//! 1. static shared props from the configuration
//! 2. runtime shared props (`share` calls)
//! 3. response props set by the page handler
//!
//! Later layers win on key collisions.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::shared::error::BoxError;

/// Prop map keyed by prop name
pub type InertiaProps = BTreeMap<String, InertiaProp>;

type Producer = dyn Fn() -> Result<Value, BoxError> + Send + Sync;

/// A deferred prop producer
#[derive(Clone)]
pub struct LazyProp(Arc<Producer>);

impl LazyProp {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the producer
    pub fn evaluate(&self) -> Result<Value, BoxError> {
        (self.0)()
    }
}

impl fmt::Debug for LazyProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyProp(..)")
    }
}

/// A single prop value
#[derive(Debug, Clone)]
pub enum InertiaProp {
    /// A value that is sent as-is
    Value(Value),
    /// A value computed only if the prop is part of the payload
    Lazy(LazyProp),
}

impl InertiaProp {
    /// A lazy prop from an infallible producer
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Lazy(LazyProp::new(move || Ok(f())))
    }

    /// A lazy prop whose producer may fail
    pub fn try_lazy<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Lazy(LazyProp::new(f))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Produce the JSON value of this prop
    pub fn resolve(&self) -> Result<Value, BoxError> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Lazy(lazy) => lazy.evaluate(),
        }
    }
}

impl From<Value> for InertiaProp {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<LazyProp> for InertiaProp {
    fn from(lazy: LazyProp) -> Self {
        Self::Lazy(lazy)
    }
}

impl From<&str> for InertiaProp {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for InertiaProp {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

/// Turn a JSON object into plain props
pub fn props_from_map(map: Map<String, Value>) -> InertiaProps {
    map.into_iter()
        .map(|(key, value)| (key, InertiaProp::Value(value)))
        .collect()
}

/// Merge `overrides` on top of `base`; keys of `overrides` win
pub fn merge(base: &InertiaProps, overrides: &InertiaProps) -> InertiaProps {
    let mut merged = base.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Keep only the props whose keys are listed in `only`
///
/// Unknown keys in `only` are ignored. An empty list keeps everything.
pub fn filter(props: InertiaProps, only: &[String]) -> InertiaProps {
    if only.is_empty() {
        return props;
    }
    props
        .into_iter()
        .filter(|(key, _)| only.iter().any(|wanted| wanted == key))
        .collect()
}

/// The prop layers of one response
#[derive(Debug, Clone, Default)]
pub struct PropStore {
    base: InertiaProps,
    shared: InertiaProps,
    props: InertiaProps,
}

impl PropStore {
    /// A store seeded with the configured and runtime shared props
    pub fn new(base: InertiaProps, shared: InertiaProps) -> Self {
        Self {
            base,
            shared,
            props: InertiaProps::new(),
        }
    }

    /// Replace the response props
    pub fn set_props(&mut self, props: InertiaProps) {
        self.props = props;
    }

    pub fn props(&self) -> &InertiaProps {
        &self.props
    }

    /// Register a shared prop; the last write for a key wins
    pub fn share(&mut self, key: impl Into<String>, value: impl Into<InertiaProp>) {
        self.shared.insert(key.into(), value.into());
    }

    /// Configured and runtime shared props, merged
    pub fn shared_props(&self) -> InertiaProps {
        merge(&self.base, &self.shared)
    }

    /// All layers merged, response props winning
    pub fn merged_props(&self) -> InertiaProps {
        merge(&self.shared_props(), &self.props)
    }
}
