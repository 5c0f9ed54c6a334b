//! Mock SSR render server helpers
//!
//! Wraps `mockito` to stand in for the external render process.

use serde_json::Value;

/// Address on which nothing is listening
pub fn unreachable_server() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Register a successful `/render` answer expected exactly `hits` times
pub fn mock_render(server: &mut mockito::Server, response: &Value, hits: usize) -> mockito::Mock {
    server
        .mock("POST", "/render")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .expect(hits)
        .create()
}

/// Async variant of [`mock_render`] for tests running inside tokio
pub async fn mock_render_async(server: &mut mockito::Server, response: &Value, hits: usize) -> mockito::Mock {
    server
        .mock("POST", "/render")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response.to_string())
        .expect(hits)
        .create_async()
        .await
}
