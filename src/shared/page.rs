//! Page payload construction
//!
//! The page object is the JSON document describing a visit:
//!
//! ```json
//! { "component": "Home", "props": { "title": "Hi" }, "url": "/", "version": "abc123" }
//! ```
//!
//! `version` is omitted when no version is configured.
//!
//! Partial reload filtering runs before lazy props are resolved, so a
//! partial reload never pays for the props it did not ask for.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::error::InertiaError;
use crate::shared::props::{self, InertiaProps, PropStore};
use crate::shared::request::InertiaRequest;

/// Wire representation of a page visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InertiaPage {
    pub component: String,
    pub props: Map<String, Value>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl InertiaPage {
    pub fn to_json(&self) -> Result<String, InertiaError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build the page payload for `component`
pub fn build_page(
    request: &InertiaRequest,
    component: &str,
    store: &PropStore,
    version: Option<String>,
) -> Result<InertiaPage, InertiaError> {
    let mut merged = store.merged_props();

    let only = request.partial_data();
    if !only.is_empty() && request.partial_component() == Some(component) {
        tracing::debug!(component, keys = ?only, "applying partial reload");
        merged = props::filter(merged, &only);
    }

    Ok(InertiaPage {
        component: component.to_string(),
        props: resolve(merged)?,
        url: request.url().to_string(),
        version,
    })
}

/// Evaluate every prop, running each lazy producer once
fn resolve(props: InertiaProps) -> Result<Map<String, Value>, InertiaError> {
    props
        .into_iter()
        .map(|(key, prop)| match prop.resolve() {
            Ok(value) => Ok((key, value)),
            Err(source) => Err(InertiaError::LazyProp { key, source }),
        })
        .collect()
}
