//! Demo page handlers

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::State;
use axum::response::Response;
use serde_json::json;

use crate::backend::error::BackendError;
use crate::backend::response::respond;
use crate::backend::template::SharedTemplate;
use crate::shared::{InertiaContext, InertiaProp};

/// `GET /`
///
/// `stats` is lazy: a partial reload asking only for `title` never computes it.
pub async fn home(
    mut ctx: InertiaContext,
    State(template): State<SharedTemplate>,
) -> Result<Response, BackendError> {
    ctx.set_component("Home");
    ctx.set_props([
        ("title", InertiaProp::from("Welcome")),
        (
            "stats",
            InertiaProp::lazy(|| {
                let generated_at = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default();
                json!({ "generatedAt": generated_at })
            }),
        ),
    ]);
    respond(ctx, template).await
}
