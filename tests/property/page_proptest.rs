//! Property-based tests for the page payload

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use inertia_responder::shared::page::build_page;
use inertia_responder::shared::{InertiaPage, InertiaProp, InertiaRequest, PropStore};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn page_strategy() -> impl Strategy<Value = InertiaPage> {
    (
        "[A-Z][a-zA-Z/]{0,12}",
        prop::collection::btree_map("[a-z]{1,6}", ".*", 0..5),
        "/[a-z0-9/?=&]{0,16}",
        prop::option::of("[a-f0-9]{6,12}"),
    )
        .prop_map(|(component, props, url, version)| InertiaPage {
            component,
            props: props.into_iter().map(|(k, v)| (k, Value::from(v))).collect::<Map<_, _>>(),
            url,
            version,
        })
}

proptest! {
    #[test]
    fn test_page_serialization_roundtrip(page in page_strategy()) {
        let json = page.to_json().unwrap();
        let decoded: InertiaPage = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(json.contains("\"version\""), page.version.is_some());
        prop_assert_eq!(decoded, page);
    }

    #[test]
    fn test_lazy_props_run_only_when_included(
        keys in prop::collection::btree_set("[a-d]", 1..5),
        requested in prop::collection::vec("[a-d]", 1..4),
    ) {
        let calls: Vec<(String, Arc<AtomicUsize>)> = keys
            .iter()
            .map(|k| (k.clone(), Arc::new(AtomicUsize::new(0))))
            .collect();

        let mut store = PropStore::default();
        for (key, counter) in &calls {
            let counter = Arc::clone(counter);
            store.share(key.clone(), InertiaProp::lazy(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Value::Null
            }));
        }

        let request = InertiaRequest::get("/")
            .with_header("X-Inertia-Partial-Data", &requested.join(","))
            .with_header("X-Inertia-Partial-Component", "Home");
        let page = build_page(&request, "Home", &store, None).unwrap();

        for (key, counter) in &calls {
            let expected = usize::from(requested.contains(key));
            prop_assert_eq!(counter.load(Ordering::SeqCst), expected);
            prop_assert_eq!(page.props.contains_key(key), expected == 1);
        }
    }
}
