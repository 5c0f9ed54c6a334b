/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it
 * directly. The error is logged and answered with a JSON body:
 *
 * ```json
 * { "error": "Internal Server Error", "status": 500 }
 * ```
 */

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        tracing::error!("Inertia render failed: {}", self);

        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, [(CONTENT_TYPE, "application/json")], body.to_string()).into_response()
    }
}
