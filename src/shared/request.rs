//! Request metadata consumed by the responder
//!
//! The host hands over the method, the URL of the visit and the request
//! headers; everything protocol-significant is read from here.

use http::{HeaderMap, Method};

/// Marker header sent by the Inertia client, echoed on JSON responses
pub const X_INERTIA: &str = "x-inertia";
/// Comma separated list of prop keys requested by a partial reload
pub const X_INERTIA_PARTIAL_DATA: &str = "x-inertia-partial-data";
/// Component the client believes is mounted during a partial reload
pub const X_INERTIA_PARTIAL_COMPONENT: &str = "x-inertia-partial-component";
/// Asset version held by the client
pub const X_INERTIA_VERSION: &str = "x-inertia-version";
/// Location the client must hard-reload after a version mismatch
pub const X_INERTIA_LOCATION: &str = "x-inertia-location";

/// An incoming request as seen by the responder
#[derive(Debug, Clone)]
pub struct InertiaRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
}

impl InertiaRequest {
    /// Create a request from its parts
    pub fn new(method: Method, url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
        }
    }

    /// A GET request without headers
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url, HeaderMap::new())
    }

    /// Add a header, replacing any previous value
    ///
    /// Invalid header names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            http::header::HeaderName::from_bytes(name.as_bytes()),
            http::HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of a header, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Whether the client marked this as an Inertia visit
    pub fn is_inertia(&self) -> bool {
        self.headers.contains_key(X_INERTIA)
    }

    /// Prop keys requested by a partial reload, empty when absent
    pub fn partial_data(&self) -> Vec<String> {
        self.header(X_INERTIA_PARTIAL_DATA)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn partial_component(&self) -> Option<&str> {
        self.header(X_INERTIA_PARTIAL_COMPONENT)
    }

    pub fn client_version(&self) -> Option<&str> {
        self.header(X_INERTIA_VERSION)
    }
}
