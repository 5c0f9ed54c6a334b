/**
 * Router Configuration
 *
 * Assembles the demo application's routes.
 *
 * # Routes
 *
 * - `GET /` - Home page (handler with a lazy prop)
 * - `GET /about` - About page (shorthand route)
 * - `/build/...` - Client bundle served from `public/build`
 * - Fallback - 404
 */

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::services::ServeDir;
use crate::backend::pages;
use crate::backend::routes::shorthand::inertia_route;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let about = json!({
        "title": "About",
        "body": "Pages are rendered by the client from the page object."
    });

    Router::new()
        .route("/", get(pages::home))
        .route(
            "/about",
            inertia_route("About", about.as_object().cloned().unwrap_or_default()),
        )
        .nest_service("/build", ServeDir::new("public/build"))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .with_state(app_state)
}
