//! Registry construction through the facade.

use pagehooks::{
    DuplicatePolicy, FnModule, Module, Phase, RouteError, RouteRegistryBuilder, Router, routes,
    testing::{CallLog, RecordingModule},
};

struct Common;
impl Module for Common {}

#[test]
fn duplicate_name_overwrites_by_default() {
    let log = CallLog::new();
    let registry = routes! {
        "common" => Common,
        "home" => RecordingModule::new("old-home", &log),
        "home" => RecordingModule::new("new-home", &log),
    }
    .unwrap();

    assert_eq!(registry.len(), 2);
    Router::new(registry).load_events("home").unwrap();
    assert_eq!(log.calls(), ["new-home.init", "new-home.finalize"]);
}

#[test]
fn duplicate_name_can_be_rejected() {
    let err = RouteRegistryBuilder::new()
        .with_policy(DuplicatePolicy::Reject)
        .register("common", Common)
        .and_then(|b| b.register("common", Common))
        .unwrap_err();

    assert_eq!(err, RouteError::Duplicate("common".into()));
}

#[test]
fn names_must_be_class_tokens() {
    let result = routes! {
        "common" => Common,
        "home page" => Common,
    };

    assert!(matches!(result, Err(RouteError::InvalidName { .. })));
}

#[test]
fn closures_make_modules() {
    let log = CallLog::new();
    let (init_log, final_log) = (log.clone(), log.clone());
    let router = Router::new(
        routes! {
            "common" => FnModule::new(
                move || {
                    init_log.record("inline", Phase::Init);
                    Ok(())
                },
                move || {
                    final_log.record("inline", Phase::Finalize);
                    Ok(())
                },
            ),
        }
        .unwrap(),
    );

    router.load_events("anything").unwrap();
    assert_eq!(log.calls(), ["inline.init", "inline.finalize"]);
}
