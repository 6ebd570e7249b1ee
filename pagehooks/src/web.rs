//! Browser host adapter.
//!
//! Reads the page's `<body>` classes and delivers the one "document ready"
//! trigger per page load.

use crate::{ActivationContext, BoxError, ClassSource, Router};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Document;

/// The `class` attribute of `document.body`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyClasses;

impl ClassSource for BodyClasses {
    fn activation_context(&self) -> Result<ActivationContext, BoxError> {
        let body = document()?.body().ok_or("document has no <body>")?;
        Ok(ActivationContext::parse(&body.class_name()))
    }
}

fn document() -> Result<Document, BoxError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no global document".into())
}

/// Run `router.load_events` once the document is ready.
///
/// Dispatches immediately if the document has finished parsing, otherwise on
/// `DOMContentLoaded`. A failed dispatch is rethrown to the page as an
/// uncaught JavaScript error.
pub fn load_events_on_ready(router: Router) -> Result<(), BoxError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        dispatch(&router);
        return Ok(());
    }

    let callback = Closure::once_into_js(move || dispatch(&router));
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| format!("failed to listen for DOMContentLoaded: {err:?}"))?;
    Ok(())
}

fn dispatch(router: &Router) {
    if let Err(err) = router.load_events(&BodyClasses) {
        #[cfg(feature = "tracing")]
        tracing::error!(error = %err, "page dispatch failed");
        wasm_bindgen::throw_str(&err.to_string());
    }
}
