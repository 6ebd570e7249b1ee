//! Routes registered from anywhere in the crate via `inventory`.
#![cfg(feature = "inventory")]

use pagehooks::{
    Module, RouteRegistryBuilder, Router,
    collected::submit_route,
    testing::CallLog,
};
use std::sync::LazyLock;

static LOG: LazyLock<CallLog> = LazyLock::new(CallLog::new);

struct Page(&'static str);

impl Module for Page {
    fn init(&self) -> Result<(), pagehooks::BoxError> {
        LOG.record(self.0, pagehooks::Phase::Init);
        Ok(())
    }
}

submit_route!("transaction", 20, Page("transaction"));
submit_route!("common", 0, Page("common"));
submit_route!("home", 10, Page("home"));

#[test]
fn collected_routes_register_in_declared_order() {
    let registry = RouteRegistryBuilder::collected().unwrap().build().unwrap();
    let names: Vec<_> = registry.names().map(|n| n.as_str()).collect();
    assert_eq!(names, ["common", "home", "transaction"]);

    Router::new(registry).load_events("transaction home").unwrap();
    assert_eq!(LOG.calls(), ["common.init", "home.init", "transaction.init"]);
}
