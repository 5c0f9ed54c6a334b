//! Responder state
//!
//! [`Inertia`] is the process-wide handle: configuration, globally shared
//! props and the SSR client. Each request gets its own [`InertiaContext`]
//! holding the component, the response props and the SSR cache, so
//! nothing set while handling one request leaks into another.
//!
//! # Example
//!
//! ```rust
//! use inertia_responder::shared::config::InertiaConfig;
//! use inertia_responder::shared::context::Inertia;
//! use inertia_responder::shared::negotiator::InertiaResponse;
//! use inertia_responder::shared::request::InertiaRequest;
//! use serde_json::json;
//!
//! let inertia = Inertia::new(InertiaConfig::builder().ssr_enabled(false).build());
//! inertia.share("appName", json!("Demo"));
//!
//! let request = InertiaRequest::get("/").with_header("X-Inertia", "true");
//! let mut ctx = inertia.context(request);
//! ctx.set_component("Home");
//! ctx.set_props([("title", json!("Hi"))]);
//!
//! match ctx.render().unwrap() {
//!     InertiaResponse::Page(page) => assert_eq!(page.props["appName"], "Demo"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use std::cell::OnceCell;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::shared::config::InertiaConfig;
use crate::shared::error::InertiaError;
use crate::shared::negotiator::{self, InertiaResponse, Negotiation};
use crate::shared::page::{self, InertiaPage};
use crate::shared::props::{self, InertiaProp, InertiaProps, PropStore};
use crate::shared::request::InertiaRequest;
use crate::shared::ssr::{HttpSsrClient, Section, SsrBridge, SsrClient};

/// Component rendered when the handler never sets one
pub const DEFAULT_COMPONENT: &str = "default";

struct InertiaInner {
    config: InertiaConfig,
    shared: RwLock<InertiaProps>,
    ssr: Arc<dyn SsrClient>,
}

/// Process-wide responder handle, cheap to clone
#[derive(Clone)]
pub struct Inertia {
    inner: Arc<InertiaInner>,
}

impl Inertia {
    /// Create a handle rendering through the configured HTTP SSR server
    pub fn new(config: InertiaConfig) -> Self {
        let client = HttpSsrClient::new(&config.ssr_server, config.ssr_timeout);
        Self::with_ssr_client(config, Arc::new(client))
    }

    /// Create a handle with a custom SSR client
    pub fn with_ssr_client(config: InertiaConfig, ssr: Arc<dyn SsrClient>) -> Self {
        Self {
            inner: Arc::new(InertiaInner {
                config,
                shared: RwLock::new(InertiaProps::new()),
                ssr,
            }),
        }
    }

    pub fn config(&self) -> &InertiaConfig {
        &self.inner.config
    }

    /// Share a prop with every following response
    ///
    /// Registrations persist across requests until [`clear_shared`](Self::clear_shared).
    pub fn share(&self, key: impl Into<String>, value: impl Into<InertiaProp>) {
        let mut shared = self.inner.shared.write().unwrap_or_else(PoisonError::into_inner);
        shared.insert(key.into(), value.into());
    }

    /// Drop all runtime shared props
    pub fn clear_shared(&self) {
        self.inner
            .shared
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Snapshot of the runtime shared props
    pub fn shared_props(&self) -> InertiaProps {
        self.inner
            .shared
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Start the responder state for one request
    pub fn context(&self, request: InertiaRequest) -> InertiaContext {
        let base = props::props_from_map(self.inner.config.shared.clone());
        InertiaContext {
            inertia: self.clone(),
            request,
            component: DEFAULT_COMPONENT.to_string(),
            store: PropStore::new(base, self.shared_props()),
            version: OnceCell::new(),
            ssr_enabled: OnceCell::new(),
            page: OnceCell::new(),
            ssr: SsrBridge::new(),
        }
    }
}

impl fmt::Debug for Inertia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inertia")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Responder state for a single request
pub struct InertiaContext {
    inertia: Inertia,
    request: InertiaRequest,
    component: String,
    store: PropStore,
    version: OnceCell<Option<String>>,
    ssr_enabled: OnceCell<bool>,
    page: OnceCell<InertiaPage>,
    ssr: SsrBridge,
}

impl InertiaContext {
    pub fn request(&self) -> &InertiaRequest {
        &self.request
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Set the client-side component; empty names are ignored
    pub fn set_component(&mut self, component: impl Into<String>) {
        let component = component.into();
        if component.is_empty() {
            tracing::debug!(current = %self.component, "ignoring empty component name");
            return;
        }
        self.component = component;
        self.page.take();
    }

    pub fn props(&self) -> &InertiaProps {
        self.store.props()
    }

    /// Replace the response props
    pub fn set_props<I, K, V>(&mut self, props: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<InertiaProp>,
    {
        self.store.set_props(
            props
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self.page.take();
    }

    /// Share a prop with this response only
    pub fn share(&mut self, key: impl Into<String>, value: impl Into<InertiaProp>) {
        self.store.share(key, value);
        self.page.take();
    }

    /// Set component and props in one go, handing `view_data` back to the host
    pub fn create_response<I, K, V, T>(&mut self, component: impl Into<String>, props: I, view_data: T) -> T
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<InertiaProp>,
    {
        self.set_component(component);
        self.set_props(props);
        view_data
    }

    /// Asset version, resolved once per request
    pub fn version(&self) -> Option<&str> {
        self.version
            .get_or_init(|| self.inertia.config().version.resolve())
            .as_deref()
    }

    fn ssr_enabled(&self) -> bool {
        *self
            .ssr_enabled
            .get_or_init(|| self.inertia.config().ssr_enabled.resolve())
    }

    /// The page payload
    ///
    /// Built once; lazy props run a single time even when both the SSR
    /// call and the container element need the payload. Changing the
    /// component or props discards the built page.
    pub fn page(&self) -> Result<InertiaPage, InertiaError> {
        self.built_page().cloned()
    }

    fn built_page(&self) -> Result<&InertiaPage, InertiaError> {
        if let Some(page) = self.page.get() {
            return Ok(page);
        }
        let page = page::build_page(
            &self.request,
            &self.component,
            &self.store,
            self.version().map(str::to_string),
        )?;
        Ok(self.page.get_or_init(|| page))
    }

    pub fn negotiation(&self) -> Negotiation {
        negotiator::negotiate(
            &self.request,
            self.version(),
            self.inertia.config().version_check,
        )
    }

    /// Produce the response for this request
    ///
    /// A terminal outcome (`Page`, `Conflict`) must be sent as-is; an
    /// `Html` outcome is the markup the host embeds in its document.
    pub fn render(&self) -> Result<InertiaResponse, InertiaError> {
        match self.negotiation() {
            Negotiation::Json => {
                tracing::debug!(component = %self.component, url = %self.request.url(), "responding with page JSON");
                Ok(InertiaResponse::Page(self.page()?))
            }
            Negotiation::VersionMismatch => {
                tracing::debug!(
                    client = ?self.request.client_version(),
                    server = ?self.version(),
                    "asset version mismatch"
                );
                Ok(InertiaResponse::Conflict {
                    location: self.request.url().to_string(),
                })
            }
            Negotiation::Html => {
                if let Some(body) = self.ssr_section(Section::Body)? {
                    return Ok(InertiaResponse::Html(body));
                }
                Ok(InertiaResponse::Html(negotiator::container_element(
                    &self.inertia.config().id,
                    self.built_page()?,
                )?))
            }
        }
    }

    /// Server-rendered head tags, empty when SSR produced nothing
    ///
    /// Always empty for terminal responses (JSON visits, conflicts).
    pub fn head(&self) -> Result<String, InertiaError> {
        if self.negotiation() != Negotiation::Html {
            return Ok(String::new());
        }
        Ok(self.ssr_section(Section::Head)?.unwrap_or_default())
    }

    fn ssr_section(&self, section: Section) -> Result<Option<String>, InertiaError> {
        if !self.ssr_enabled() {
            return Ok(None);
        }
        self.ssr
            .section(section, self.inertia.inner.ssr.as_ref(), || self.page())
    }
}

impl fmt::Debug for InertiaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InertiaContext")
            .field("request", &self.request)
            .field("component", &self.component)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
