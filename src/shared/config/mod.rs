//! Responder configuration
//!
//! Mirrors the option surface a host supplies: the root element `id`, the
//! asset `version`, the `ssr.enabled`/`ssr.server` pair and the static
//! `shared` props. Values that may be computed per request are wrapped in
//! a [`Provider`].
//!
//! Configuration can be built in code or parsed from TOML:
//!
//! ```toml
//! id = "app"
//! version = "1.0"
//!
//! [shared]
//! appName = "Demo"
//!
//! [ssr]
//! enabled = true
//! server = "http://127.0.0.1:13714"
//! timeout_ms = 2000
//! ```

pub mod provider;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use provider::Provider;

/// Default DOM id of the client root element
pub const DEFAULT_ID: &str = "app";

/// Default address of the SSR render server
pub const DEFAULT_SSR_SERVER: &str = "http://127.0.0.1:13714";

/// Responder configuration
#[derive(Debug, Clone)]
pub struct InertiaConfig {
    /// DOM id of the container element
    pub id: String,
    /// Asset version, re-read for every request
    pub version: Provider<Option<String>>,
    /// Whether a stale client version is answered with `409 Conflict`
    pub version_check: bool,
    /// Whether SSR is attempted, re-read for every request
    pub ssr_enabled: Provider<bool>,
    /// Base URL of the SSR render server
    pub ssr_server: String,
    /// Timeout for the render call; reqwest's default when unset
    pub ssr_timeout: Option<Duration>,
    /// Static props shared with every response
    pub shared: Map<String, Value>,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            version: Provider::Value(None),
            version_check: true,
            ssr_enabled: Provider::Value(true),
            ssr_server: DEFAULT_SSR_SERVER.to_string(),
            ssr_timeout: None,
            shared: Map::new(),
        }
    }
}

impl InertiaConfig {
    /// Create a new InertiaConfigBuilder
    pub fn builder() -> InertiaConfigBuilder {
        InertiaConfigBuilder::default()
    }

    /// Parse configuration from a TOML document
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(source)?;
        Ok(file.into_config())
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    ///
    /// An invalid SSR server URL is not fatal at render time (SSR is then
    /// skipped), but hosts can call this at startup to surface it early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::MissingValue("id"));
        }
        url::Url::parse(&self.ssr_server)
            .map_err(|_| ConfigError::InvalidUrl(self.ssr_server.clone()))?;
        Ok(())
    }
}

/// Builder for InertiaConfig
#[derive(Debug, Default)]
pub struct InertiaConfigBuilder {
    config: InertiaConfig,
}

impl InertiaConfigBuilder {
    /// Set the container element id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = id.into();
        self
    }

    /// Set a fixed asset version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = Provider::Value(Some(version.into()));
        self
    }

    /// Compute the asset version on every request
    pub fn version_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.config.version = Provider::from_fn(f);
        self
    }

    /// Enable or disable the version mismatch check
    pub fn version_check(mut self, enabled: bool) -> Self {
        self.config.version_check = enabled;
        self
    }

    /// Enable or disable SSR
    pub fn ssr_enabled(mut self, enabled: bool) -> Self {
        self.config.ssr_enabled = Provider::Value(enabled);
        self
    }

    /// Decide per request whether SSR is attempted
    pub fn ssr_enabled_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.config.ssr_enabled = Provider::from_fn(f);
        self
    }

    /// Set the SSR server URL
    pub fn ssr_server(mut self, url: impl Into<String>) -> Self {
        self.config.ssr_server = url.into();
        self
    }

    /// Set the SSR call timeout
    pub fn ssr_timeout(mut self, timeout: Duration) -> Self {
        self.config.ssr_timeout = Some(timeout);
        self
    }

    /// Add a static shared prop
    pub fn share(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.shared.insert(key.into(), value.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> InertiaConfig {
        self.config
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk shape of the configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    id: Option<String>,
    version: Option<String>,
    version_check: Option<bool>,
    shared: Map<String, Value>,
    ssr: FileSsrConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSsrConfig {
    enabled: Option<bool>,
    server: Option<String>,
    timeout_ms: Option<u64>,
}

impl FileConfig {
    fn into_config(self) -> InertiaConfig {
        let defaults = InertiaConfig::default();
        InertiaConfig {
            id: self.id.unwrap_or(defaults.id),
            version: Provider::Value(self.version),
            version_check: self.version_check.unwrap_or(defaults.version_check),
            ssr_enabled: Provider::Value(self.ssr.enabled.unwrap_or(true)),
            ssr_server: self.ssr.server.unwrap_or(defaults.ssr_server),
            ssr_timeout: self.ssr.timeout_ms.map(Duration::from_millis),
            shared: self.shared,
        }
    }
}
