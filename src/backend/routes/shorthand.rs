/**
 * Shorthand Routes
 *
 * A route that renders a component with fixed props and needs no handler
 * of its own, for pages such as "About" or "Terms".
 *
 * # Example
 *
 * ```rust,ignore
 * let router = Router::new()
 *     .route("/about", inertia_route("About", props))
 *     .with_state(app_state);
 * ```
 */

use axum::extract::{FromRef, State};
use axum::routing::{get, MethodRouter};
use serde_json::{Map, Value};
use crate::backend::response::respond;
use crate::backend::template::SharedTemplate;
use crate::shared::{Inertia, InertiaContext};

/// A GET route rendering `component` with `props`
pub fn inertia_route<S>(component: impl Into<String>, props: Map<String, Value>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
    Inertia: FromRef<S>,
    SharedTemplate: FromRef<S>,
{
    let component = component.into();
    get(move |ctx: InertiaContext, State(template): State<SharedTemplate>| {
        let component = component.clone();
        let props = props.clone();
        async move {
            let mut ctx = ctx;
            ctx.create_response(component, props, ());
            respond(ctx, template).await
        }
    })
}
