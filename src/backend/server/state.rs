/**
 * Application State
 *
 * `AppState` holds what every page handler needs: the process-wide
 * `Inertia` handle and the root document template. The `FromRef`
 * implementations let handlers extract either part on its own, and make
 * `InertiaContext` usable as an extractor.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use inertia_responder::backend::template::SharedTemplate;
 * use inertia_responder::shared::InertiaContext;
 *
 * async fn handler(mut ctx: InertiaContext, State(template): State<SharedTemplate>) {
 *     ctx.set_component("Home");
 * }
 * ```
 */

use axum::extract::FromRef;
use crate::backend::template::SharedTemplate;
use crate::shared::Inertia;

/// Shared state of the demo application
#[derive(Clone)]
pub struct AppState {
    /// Responder handle (configuration, shared props, SSR client)
    pub inertia: Inertia,
    /// Root document template
    pub template: SharedTemplate,
}

impl AppState {
    pub fn new(inertia: Inertia, template: SharedTemplate) -> Self {
        Self { inertia, template }
    }
}

impl FromRef<AppState> for Inertia {
    fn from_ref(state: &AppState) -> Self {
        state.inertia.clone()
    }
}

impl FromRef<AppState> for SharedTemplate {
    fn from_ref(state: &AppState) -> Self {
        state.template.clone()
    }
}
