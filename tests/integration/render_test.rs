//! End-to-end render scenarios without an HTTP host

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use inertia_responder::shared::{
    InertiaConfig, Inertia, InertiaProp, InertiaRequest, InertiaResponse,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_ok;
use crate::common::{data_page, inertia_without_ssr};

fn page_json(response: InertiaResponse) -> Value {
    let http = assert_ok!(response.into_http());
    assert_eq!(http.headers()["x-inertia"], "true");
    assert_eq!(http.headers()["vary"], "Accept");
    assert_ok!(serde_json::from_str(http.body()))
}

#[test]
fn test_partial_reload_scenario() {
    let inertia = inertia_without_ssr();
    let mut ctx = inertia.context(
        InertiaRequest::get("/")
            .with_header("X-Inertia", "true")
            .with_header("X-Inertia-Partial-Data", "title")
            .with_header("X-Inertia-Partial-Component", "Home"),
    );
    ctx.set_component("Home");
    ctx.set_props([("title", json!("Hi")), ("secret", json!("x"))]);

    let body = page_json(assert_ok!(ctx.render()));
    assert_eq!(body["props"], json!({"title": "Hi"}));
    assert_eq!(body["component"], "Home");
}

#[test]
fn test_version_presence() {
    let inertia = inertia_without_ssr();
    let ctx = inertia.context(InertiaRequest::get("/").with_header("X-Inertia", "true"));
    let body = page_json(assert_ok!(ctx.render()));
    assert!(body.get("version").is_none());

    let inertia = Inertia::new(InertiaConfig::builder().ssr_enabled(false).version("abc123").build());
    let ctx = inertia.context(InertiaRequest::get("/").with_header("X-Inertia", "true"));
    let http = assert_ok!(assert_ok!(ctx.render()).into_http());
    assert!(http.body().contains(r#""version":"abc123""#));
}

#[test]
fn test_container_round_trips_page() {
    let inertia = Inertia::new(
        InertiaConfig::builder()
            .ssr_enabled(false)
            .version("abc123")
            .share("appName", "Demo")
            .build(),
    );
    let mut ctx = inertia.context(InertiaRequest::get("/posts?sort=new&page=2"));
    ctx.set_component("Posts/Index");
    ctx.set_props([("quote", json!("She said \"<hi>\" & 'left'"))]);

    let html = match assert_ok!(ctx.render()) {
        InertiaResponse::Html(html) => html,
        other => panic!("Expected Html, got {:?}", other),
    };

    assert_eq!(
        data_page(&html),
        json!({
            "component": "Posts/Index",
            "props": {"appName": "Demo", "quote": "She said \"<hi>\" & 'left'"},
            "url": "/posts?sort=new&page=2",
            "version": "abc123"
        })
    );
}

#[test]
fn test_lazy_props_evaluated_once_per_build() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let inertia = inertia_without_ssr();
    inertia.share(
        "notifications",
        InertiaProp::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            json!([])
        }),
    );

    for _ in 0..3 {
        let ctx = inertia.context(InertiaRequest::get("/").with_header("X-Inertia", "true"));
        assert_ok!(ctx.render());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_stale_client_gets_conflict() {
    let inertia = Inertia::new(InertiaConfig::builder().ssr_enabled(false).version("v2").build());
    let ctx = inertia.context(
        InertiaRequest::get("/settings")
            .with_header("X-Inertia", "true")
            .with_header("X-Inertia-Version", "v1"),
    );

    let http = assert_ok!(assert_ok!(ctx.render()).into_http());
    assert_eq!(http.status(), 409);
    assert_eq!(http.headers()["x-inertia-location"], "/settings");
}
