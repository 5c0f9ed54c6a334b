/**
 * Server Initialization
 *
 * Builds the `Inertia` handle, the root template and the router.
 *
 * # Initialization Process
 *
 * 1. Load the responder configuration
 * 2. Create the `Inertia` handle and register global shared props
 * 3. Create the root document template
 * 4. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_config;
use crate::backend::server::state::AppState;
use crate::backend::template::{DocumentTemplate, SharedTemplate};
use crate::shared::Inertia;

/// Create the demo application from the environment configuration
pub fn create_app() -> Router<()> {
    tracing::info!("Initializing Inertia demo server");

    let config = load_config();
    let inertia = Inertia::new(config);
    inertia.share("appName", "Inertia Demo");

    let template: SharedTemplate = Arc::new(
        DocumentTemplate::new("Inertia Demo")
            .stylesheet("/build/app.css")
            .script("/build/app.js"),
    );

    let app = create_app_with(inertia, template);
    tracing::info!("Router configured");
    app
}

/// Create the demo application around an existing handle and template
pub fn create_app_with(inertia: Inertia, template: SharedTemplate) -> Router<()> {
    create_router(AppState::new(inertia, template))
}
