//! Sending Inertia responses through axum
//!
//! [`respond`] is what page handlers return. It runs the render on the
//! blocking pool, since the SSR call is a blocking HTTP request, then:
//!
//! - sends JSON page payloads and version conflicts as-is, with no
//!   template output at all
//! - wraps HTML outcomes (SSR body or container element) and the SSR head
//!   tags in the root template

use axum::body::Body;
use axum::response::{Html, IntoResponse, Response};

use crate::backend::error::BackendError;
use crate::backend::template::SharedTemplate;
use crate::shared::{InertiaContext, InertiaError, InertiaResponse};

enum Rendered {
    Terminal(InertiaResponse),
    Document(String),
}

/// Render `ctx` into a complete HTTP response
pub async fn respond(ctx: InertiaContext, template: SharedTemplate) -> Result<Response, BackendError> {
    let rendered = tokio::task::spawn_blocking(move || -> Result<Rendered, InertiaError> {
        match ctx.render()? {
            InertiaResponse::Html(body) => {
                let head = ctx.head()?;
                Ok(Rendered::Document(template.render(&head, &body)))
            }
            terminal => Ok(Rendered::Terminal(terminal)),
        }
    })
    .await??;

    Ok(match rendered {
        Rendered::Terminal(terminal) => terminal.into_http()?.map(Body::from).into_response(),
        Rendered::Document(document) => Html(document).into_response(),
    })
}

impl IntoResponse for InertiaResponse {
    fn into_response(self) -> Response {
        match self.into_http() {
            Ok(response) => response.map(Body::from).into_response(),
            Err(e) => BackendError::from(e).into_response(),
        }
    }
}
