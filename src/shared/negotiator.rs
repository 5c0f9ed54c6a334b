//! Response negotiation
//!
//! Decides, from the request alone, what kind of response a visit gets:
//!
//! - `Json`: a GET carrying the `X-Inertia` marker receives the page
//!   payload and nothing else
//! - `VersionMismatch`: the same request, but the client holds a stale
//!   asset version; it is answered with `409 Conflict` and an
//!   `X-Inertia-Location` header so the client performs a full reload
//! - `Html`: everything else receives markup, either the SSR body or the
//!   static container element
//!
//! Building the outcome is pure; emitting it (and discarding anything the
//! host template would have produced) is left to the host glue.

use http::header::{CONTENT_TYPE, VARY};
use http::{Method, Response, StatusCode};

use crate::shared::error::InertiaError;
use crate::shared::page::InertiaPage;
use crate::shared::request::{InertiaRequest, X_INERTIA, X_INERTIA_LOCATION};

/// Which branch a request takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiation {
    Json,
    VersionMismatch,
    Html,
}

/// Pick the response kind for `request`
///
/// `version` is the server's current asset version. The mismatch branch is
/// only taken when `check_version` is set, a version is configured and the
/// client sent a different one.
pub fn negotiate(request: &InertiaRequest, version: Option<&str>, check_version: bool) -> Negotiation {
    if request.method() != Method::GET || !request.is_inertia() {
        return Negotiation::Html;
    }

    if check_version {
        if let (Some(server), Some(client)) = (version, request.client_version()) {
            if server != client {
                return Negotiation::VersionMismatch;
            }
        }
    }

    Negotiation::Json
}

/// Final outcome of a render
#[derive(Debug, Clone, PartialEq)]
pub enum InertiaResponse {
    /// JSON page payload for an Inertia visit
    Page(InertiaPage),
    /// Stale client, force a full reload of `location`
    Conflict { location: String },
    /// Markup for the host template to embed
    Html(String),
}

impl InertiaResponse {
    /// Whether the host must stop rendering and send this response as-is
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Html(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::CONFLICT,
            _ => StatusCode::OK,
        }
    }

    /// Build the HTTP response for this outcome
    ///
    /// `Html` is returned as a bare `text/html` fragment; hosts normally
    /// wrap it in their document template first.
    pub fn into_http(self) -> Result<Response<String>, InertiaError> {
        let status = self.status();
        let builder = Response::builder().status(status);

        let response = match self {
            Self::Page(page) => builder
                .header(CONTENT_TYPE, "application/json")
                .header(VARY, "Accept")
                .header(X_INERTIA, "true")
                .body(page.to_json()?)?,
            Self::Conflict { location } => builder
                .header(X_INERTIA_LOCATION, location)
                .body(String::new())?,
            Self::Html(markup) => builder
                .header(CONTENT_TYPE, "text/html; charset=utf-8")
                .body(markup)?,
        };
        Ok(response)
    }
}

/// The static root element carrying the page as a `data-page` attribute
pub fn container_element(id: &str, page: &InertiaPage) -> Result<String, InertiaError> {
    let json = page.to_json()?;
    Ok(format!(
        r#"<div id="{}" data-page="{}"></div>"#,
        escape_attribute(id),
        escape_attribute(&json)
    ))
}

fn escape_attribute(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}
