#![allow(dead_code)]

use pagehooks::{
    Phase, RouteRegistryBuilder, Router,
    testing::{CallLog, FailingModule, RecordingModule},
};

// ============================================================================
// Test Routers
// ============================================================================

/// A router whose every route records into `log` under its own name.
pub fn recording_router(names: &[&str], log: &CallLog) -> Router {
    let mut builder = RouteRegistryBuilder::new();
    for name in names {
        builder
            .register_mut(name, RecordingModule::new(*name, log))
            .unwrap();
    }
    Router::new(builder.build().unwrap())
}

/// `{common, home, transaction}` where `failing` fails in `phase`.
pub fn router_with_failure(failing: &str, phase: Phase, log: &CallLog) -> Router {
    let mut builder = RouteRegistryBuilder::new();
    for name in ["common", "home", "transaction"] {
        if name == failing {
            builder
                .register_mut(name, FailingModule::new(name, phase, log))
                .unwrap();
        } else {
            builder
                .register_mut(name, RecordingModule::new(name, log))
                .unwrap();
        }
    }
    Router::new(builder.build().unwrap())
}
