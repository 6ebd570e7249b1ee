//! Properties that hold for every registry and every document.

use pagehooks::{ActivationContext, Phase, testing::CallLog};
use proptest::prelude::*;
use std::collections::BTreeSet;

mod common;
use common::{recording_router, router_with_failure};

const POOL: &[&str] = &["home", "transaction", "project", "home-page", "subproject", "common"];

fn routes() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(POOL.to_vec(), 0..POOL.len())
        .prop_shuffle()
        .prop_map(|mut names| {
            names.retain(|n| *n != "common");
            names.insert(0, "common");
            names
        })
}

fn classes() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(
        prop_oneof![proptest::sample::select(POOL.to_vec()), Just("other"), Just("Home")],
        0..6,
    )
}

proptest! {
    #[test]
    fn common_is_always_first(names in routes(), classes in classes()) {
        let log = CallLog::new();
        let router = recording_router(&names, &log);
        let context: ActivationContext = classes.iter().copied().collect();

        let active = router.active_set(&context);
        let first = active.names().next().map(|n| n.as_str());

        prop_assert_eq!(first, Some("common"));
        prop_assert_eq!(active.names().filter(|n| n.is_common()).count(), 1);
    }

    #[test]
    fn active_set_is_registry_order_filtered_by_class(
        names in routes(),
        classes in classes(),
    ) {
        let log = CallLog::new();
        let router = recording_router(&names, &log);
        let tokens: BTreeSet<&str> = classes.iter().copied().collect();

        let expected: Vec<&str> = std::iter::once("common")
            .chain(names.iter().copied().filter(|n| *n != "common" && tokens.contains(n)))
            .collect();

        let report = router.load_events(&classes.join(" ")).unwrap();
        let ran: Vec<&str> = report.routes().iter().map(|n| n.as_str()).collect();
        prop_assert_eq!(ran, expected);
    }

    #[test]
    fn every_init_precedes_every_finalize_in_same_order(
        names in routes(),
        classes in classes(),
    ) {
        let log = CallLog::new();
        let router = recording_router(&names, &log);

        router.load_events(&classes.join(" ")).unwrap();

        let entries = log.entries();
        let split = entries.iter().position(|(_, p)| *p == Phase::Finalize).unwrap();
        let (inits, finals) = entries.split_at(split);
        prop_assert!(inits.iter().all(|(_, p)| *p == Phase::Init));
        prop_assert!(finals.iter().all(|(_, p)| *p == Phase::Finalize));

        let init_order: Vec<&String> = inits.iter().map(|(l, _)| l).collect();
        let final_order: Vec<&String> = finals.iter().map(|(l, _)| l).collect();
        prop_assert_eq!(init_order, final_order);
    }

    #[test]
    fn failing_init_never_reaches_finalize(classes in classes()) {
        let log = CallLog::new();
        let router = router_with_failure("common", Phase::Init, &log);

        prop_assert!(router.load_events(&classes.join(" ")).is_err());
        prop_assert_eq!(log.calls(), vec!["common.init".to_string()]);
    }
}
