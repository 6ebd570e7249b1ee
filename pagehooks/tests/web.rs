//! Browser host adapter, run with `wasm-pack test --headless --firefox -- --features web`.
#![cfg(all(target_arch = "wasm32", feature = "web"))]

use pagehooks::{
    ClassSource,
    testing::CallLog,
    web::{BodyClasses, load_events_on_ready},
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

mod common;
use common::recording_router;

wasm_bindgen_test_configure!(run_in_browser);

fn set_body_classes(classes: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("test page has a body");
    body.set_class_name(classes);
}

#[wasm_bindgen_test]
fn body_classes_are_parsed_from_the_page() {
    set_body_classes("  transaction\tproject ");

    let context = BodyClasses.activation_context().unwrap();

    assert!(context.contains("transaction"));
    assert!(context.contains("project"));
    assert_eq!(context.len(), 2);
}

#[wasm_bindgen_test]
fn loaded_document_dispatches_immediately() {
    set_body_classes("home home-page");
    let log = CallLog::new();
    let router = recording_router(&["common", "home", "transaction"], &log);

    load_events_on_ready(router).unwrap();

    assert_eq!(
        log.calls(),
        ["common.init", "home.init", "common.finalize", "home.finalize"]
    );
}

#[wasm_bindgen_test]
fn page_without_matching_classes_runs_common_only() {
    set_body_classes("");
    let log = CallLog::new();
    let router = recording_router(&["common", "home"], &log);

    load_events_on_ready(router).unwrap();

    assert_eq!(log.calls(), ["common.init", "common.finalize"]);
}
