//! SSR bridge
//!
//! Proxies the page payload to an external render server
//! (`POST {server}/render`) and hands out the `head` and `body`
//! sections of its answer. SSR is an optimization: every transport or
//! decoding problem is logged and reported as "no output", and the
//! caller renders the static container element instead.
//!
//! The render server is called at most once per request. The outcome
//! (hit or miss) is cached on the [`SsrBridge`], which lives inside the
//! request context.

use std::cell::OnceCell;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::shared::error::InertiaError;
use crate::shared::page::InertiaPage;

const RENDER_PATH: &str = "/render";

/// Section of the SSR response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Head,
    Body,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
        }
    }
}

/// A section value: a list of tags or a single markup string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SsrFragment {
    Tags(Vec<String>),
    Markup(String),
}

impl SsrFragment {
    /// Tags are joined with newlines
    pub fn to_markup(&self) -> String {
        match self {
            Self::Tags(tags) => tags.join("\n"),
            Self::Markup(markup) => markup.clone(),
        }
    }
}

/// Answer of the render server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SsrResponse {
    #[serde(default)]
    pub head: Option<SsrFragment>,
    #[serde(default)]
    pub body: Option<SsrFragment>,
}

impl SsrResponse {
    pub fn section(&self, section: Section) -> Option<&SsrFragment> {
        match section {
            Section::Head => self.head.as_ref(),
            Section::Body => self.body.as_ref(),
        }
    }
}

/// Reasons a render call produced nothing
#[derive(Debug, Error)]
pub enum SsrError {
    #[error("SSR server is not configured")]
    Unconfigured,
    #[error("SSR request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("SSR server answered with status {0}")]
    Status(u16),
    #[error("malformed SSR response: {0}")]
    Malformed(String),
}

/// Something that can server-render a page
pub trait SsrClient: Send + Sync {
    fn render(&self, page: &InertiaPage) -> Result<SsrResponse, SsrError>;
}

/// Normalize a server base URL to its `/render` endpoint
///
/// Both `http://host:13714` and `http://host:13714/render` are accepted.
/// Returns `None` when the URL cannot be parsed.
pub fn render_endpoint(server: &str) -> Option<String> {
    let mut base = server.trim().trim_end_matches('/');
    while let Some(stripped) = base.strip_suffix(RENDER_PATH) {
        base = stripped.trim_end_matches('/');
    }
    let endpoint = format!("{}{}", base, RENDER_PATH);
    url::Url::parse(&endpoint).ok()?;
    Some(endpoint)
}

/// Render client talking to an HTTP render server
///
/// The underlying `reqwest::blocking::Client` is built on first use, so the
/// handle can be created inside an async runtime as long as rendering
/// itself runs on a blocking thread.
#[derive(Debug)]
pub struct HttpSsrClient {
    client: OnceLock<reqwest::blocking::Client>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl HttpSsrClient {
    /// Create a client for `server`
    ///
    /// An unusable URL is logged and leaves the client unconfigured; every
    /// render then reports [`SsrError::Unconfigured`].
    pub fn new(server: &str, timeout: Option<Duration>) -> Self {
        let endpoint = render_endpoint(server);
        if endpoint.is_none() {
            tracing::warn!(server, "invalid SSR server URL, SSR disabled");
        }

        Self {
            client: OnceLock::new(),
            endpoint,
            timeout,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn client(&self) -> &reqwest::blocking::Client {
        self.client.get_or_init(|| {
            let mut builder = reqwest::blocking::Client::builder();
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().unwrap_or_else(|e| {
                tracing::warn!("failed to build SSR client, using defaults: {}", e);
                reqwest::blocking::Client::new()
            })
        })
    }
}

impl SsrClient for HttpSsrClient {
    fn render(&self, page: &InertiaPage) -> Result<SsrResponse, SsrError> {
        let endpoint = self.endpoint.as_deref().ok_or(SsrError::Unconfigured)?;

        let response = self.client().post(endpoint).json(page).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SsrError::Status(status.as_u16()));
        }

        let text = response.text()?;
        serde_json::from_str(&text).map_err(|e| SsrError::Malformed(e.to_string()))
    }
}

/// Per-request SSR cache
#[derive(Debug, Default)]
pub struct SsrBridge {
    response: OnceCell<Option<SsrResponse>>,
}

impl SsrBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the render server has already been consulted
    pub fn is_cached(&self) -> bool {
        self.response.get().is_some()
    }

    /// Fetch one section, calling the render server on first use
    ///
    /// `page` is only built when no outcome is cached yet. Payload errors
    /// propagate; render failures come back as `Ok(None)`.
    pub fn section<F>(
        &self,
        section: Section,
        client: &dyn SsrClient,
        page: F,
    ) -> Result<Option<String>, InertiaError>
    where
        F: FnOnce() -> Result<InertiaPage, InertiaError>,
    {
        let response = match self.response.get() {
            Some(response) => response,
            None => {
                let page = page()?;
                let outcome = match client.render(&page) {
                    Ok(response) => {
                        tracing::debug!(component = %page.component, "SSR render succeeded");
                        Some(response)
                    }
                    Err(e) => {
                        tracing::warn!(component = %page.component, "SSR unavailable, falling back: {}", e);
                        None
                    }
                };
                self.response.get_or_init(|| outcome)
            }
        };

        let markup = response
            .as_ref()
            .and_then(|response| response.section(section))
            .map(SsrFragment::to_markup);
        if markup.is_none() && response.is_some() {
            tracing::debug!(section = section.as_str(), "SSR response has no such section");
        }
        Ok(markup)
    }
}
