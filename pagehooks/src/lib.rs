//! # pagehooks - Class-Driven Page Behavior for Multi-Page Sites
//!
//! `pagehooks` decides, per loaded page, which bundles of page-specific
//! behavior to activate and runs their lifecycle hooks in a deterministic
//! order. The server template selects behavior purely by emitting root
//! class tokens; no client-side URL parsing is involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagehooks::prelude::*;
//!
//! struct Common;
//! impl Module for Common {
//!     fn init(&self) -> Result<(), BoxError> {
//!         // runs on every page
//!         Ok(())
//!     }
//! }
//!
//! struct Home;
//! impl Module for Home {
//!     fn finalize(&self) -> Result<(), BoxError> {
//!         // runs on pages whose root carries the `home` class,
//!         // after every active `init`
//!         Ok(())
//!     }
//! }
//!
//! let router = Router::new(routes! {
//!     "common" => Common,
//!     "home" => Home,
//! }?);
//!
//! let report = router.load_events("home logged-in")?;
//! assert_eq!(report.routes(), ["common", "home"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! In the browser, enable the `web` feature and hand the router to
//! `web::load_events_on_ready`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use pagehooks_core::{
    // Page view
    ActivationContext,
    // Errors
    BoxError,
    CallbackError,
    ClassSource,
    // Modules
    FnModule,
    HookError,
    Module,
    PageError,
    Phase,
    RouteError,
    // Route names
    COMMON,
    RouteName,
};

pub use pagehooks_std::{
    // Callbacks
    CallbackRegistry,
    Comparator,
    Formatter,
    WidgetCallbacks,
    // Dispatch
    ActiveSet,
    DispatchReport,
    Router,
    // Registry
    DuplicatePolicy,
    RouteEntry,
    RouteRegistry,
    RouteRegistryBuilder,
    routes,
};

/// Standard module wrappers.
pub mod hooks {
    pub use pagehooks_std::hooks::Instrumented;
}

/// Testing utilities.
pub mod testing {
    pub use pagehooks_std::testing::{CallLog, FailingModule, RecordingModule};
}

/// Routes collected via `inventory`.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use pagehooks_std::collected::CollectedRoute;
    pub use pagehooks_std::submit_route;
}

#[cfg(feature = "web")]
pub mod web;

/// Prelude module - common imports for pagehooks.
///
/// # Usage
///
/// ```rust
/// use pagehooks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, ClassSource, Module, PageError, Phase, Router, RouteRegistryBuilder, routes,
    };
}
