//! SSR bridge against a mock render server

use inertia_responder::shared::ssr::{HttpSsrClient, SsrClient, SsrError};
use inertia_responder::shared::{InertiaPage, InertiaRequest, InertiaResponse};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::{json, Map};

use crate::common::{inertia_with_ssr, mock_render, unreachable_server};
use crate::{assert_contains, assert_ok};

fn home_page() -> InertiaPage {
    InertiaPage {
        component: "Home".into(),
        props: json!({"title": "Hi"}).as_object().cloned().unwrap_or_else(Map::new),
        url: "/".into(),
        version: None,
    }
}

#[test]
fn test_client_posts_page_to_render_endpoint() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/render")
        .match_body(Matcher::Json(json!({"component": "Home", "props": {"title": "Hi"}, "url": "/"})))
        .with_status(200)
        .with_body(r#"{"head":["<title>A</title>"],"body":"<div>A</div>"}"#)
        .create();

    let client = HttpSsrClient::new(&format!("{}/render", server.url()), None);
    let response = assert_ok!(client.render(&home_page()));

    assert_eq!(response.body.map(|b| b.to_markup()).as_deref(), Some("<div>A</div>"));
    mock.assert();
}

#[test]
fn test_client_reports_error_status() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", "/render").with_status(500).create();

    let client = HttpSsrClient::new(&server.url(), None);
    assert!(matches!(client.render(&home_page()), Err(SsrError::Status(500))));
}

#[test]
fn test_client_reports_malformed_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/render")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let client = HttpSsrClient::new(&server.url(), None);
    assert!(matches!(client.render(&home_page()), Err(SsrError::Malformed(_))));
}

#[test]
fn test_head_and_body_from_one_render_call() {
    let mut server = mockito::Server::new();
    let mock = mock_render(
        &mut server,
        &json!({
            "head": ["<title>A</title>", "<meta name=\"description\" content=\"a\">"],
            "body": "<div id=\"app\" data-server-rendered=\"true\">A</div>"
        }),
        1,
    );

    let inertia = inertia_with_ssr(&server.url());
    let mut ctx = inertia.context(InertiaRequest::get("/"));
    ctx.set_component("Home");

    let head = assert_ok!(ctx.head());
    let body = assert_ok!(ctx.render());

    assert_eq!(head, "<title>A</title>\n<meta name=\"description\" content=\"a\">");
    assert_eq!(
        body,
        InertiaResponse::Html("<div id=\"app\" data-server-rendered=\"true\">A</div>".into())
    );
    mock.assert();
}

#[test]
fn test_unreachable_server_falls_back_to_container() {
    let inertia = inertia_with_ssr(&unreachable_server());
    let mut ctx = inertia.context(InertiaRequest::get("/"));
    ctx.set_component("Home");

    assert_eq!(assert_ok!(ctx.head()), "");
    match assert_ok!(ctx.render()) {
        InertiaResponse::Html(html) => assert_contains!(html, "<div id=\"app\" data-page="),
        other => panic!("Expected Html, got {:?}", other),
    }
}

#[test]
fn test_missing_body_section_falls_back() {
    let mut server = mockito::Server::new();
    let mock = mock_render(&mut server, &json!({"head": ["<title>A</title>"]}), 1);

    let inertia = inertia_with_ssr(&server.url());
    let ctx = inertia.context(InertiaRequest::get("/"));

    match assert_ok!(ctx.render()) {
        InertiaResponse::Html(html) => assert_contains!(html, "data-page="),
        other => panic!("Expected Html, got {:?}", other),
    }
    assert_eq!(assert_ok!(ctx.head()), "<title>A</title>");
    mock.assert();
}

#[test]
fn test_inertia_visit_never_calls_render_server() {
    let mut server = mockito::Server::new();
    let mock = mock_render(&mut server, &json!({"head": [], "body": "<div></div>"}), 0);

    let inertia = inertia_with_ssr(&server.url());
    let ctx = inertia.context(InertiaRequest::get("/").with_header("X-Inertia", "true"));

    assert_eq!(assert_ok!(ctx.head()), "");
    assert!(matches!(assert_ok!(ctx.render()), InertiaResponse::Page(_)));
    mock.assert();
}
