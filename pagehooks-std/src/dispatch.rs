//! # Dispatcher (Router)
//!
//! Decides which registered modules apply to the loaded document and runs
//! their lifecycle hooks.
//!
//! A dispatch is a single synchronous pass:
//!
//! 1. Read the document root classes into an [`ActivationContext`].
//! 2. Compute the [`ActiveSet`]: `common` first, then every other route whose
//!    name is a class token, in registry order.
//! 3. Run `init` on every active module.
//! 4. Run `finalize` on every active module, in the same order.
//!
//! The first failing hook ends the dispatch; its error is returned to the
//! caller untouched apart from the route and phase it came from.
//!
//! # Example
//!
//! ```rust
//! use pagehooks_std::{Router, routes, testing::{CallLog, RecordingModule}};
//!
//! let log = CallLog::new();
//! let registry = routes! {
//!     "common" => RecordingModule::new("common", &log),
//!     "home" => RecordingModule::new("home", &log),
//! }?;
//!
//! Router::new(registry).load_events("home")?;
//! assert_eq!(
//!     log.calls(),
//!     ["common.init", "home.init", "common.finalize", "home.finalize"],
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::registry::{RouteEntry, RouteRegistry};
use pagehooks_core::{ActivationContext, ClassSource, HookError, PageError, Phase, RouteName};
use std::sync::Arc;

/// Dispatches lifecycle hooks for the current page.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Debug, Clone)]
pub struct Router {
    registry: Arc<RouteRegistry>,
}

impl Router {
    /// Create a router over a built registry.
    pub fn new(registry: RouteRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Compute the modules active for `context`.
    ///
    /// `common` is always first and appears once, even if the document
    /// carries a `common` class.
    pub fn active_set(&self, context: &ActivationContext) -> ActiveSet<'_> {
        let entries = std::iter::once(self.registry.common())
            .chain(
                self.registry
                    .iter()
                    .filter(|e| !e.name().is_common() && context.contains(e.name().as_str())),
            )
            .collect();
        ActiveSet { entries }
    }

    /// Run the page lifecycle for the document described by `source`.
    ///
    /// This is the single entry point a host calls once the document is
    /// ready. Calling it again re-reads the document and runs a full, fresh
    /// dispatch.
    pub fn load_events<S>(&self, source: &S) -> Result<DispatchReport, PageError>
    where
        S: ClassSource + ?Sized,
    {
        let context = source.activation_context().map_err(PageError::Document)?;
        let active = self.active_set(&context);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("load_events", classes = context.len()).entered();
        #[cfg(feature = "tracing")]
        tracing::debug!(routes = ?active.names().collect::<Vec<_>>(), "resolved active routes");

        for phase in Phase::ALL {
            active.run(phase)?;
        }

        Ok(DispatchReport {
            routes: active.names().cloned().collect(),
        })
    }
}

/// The ordered modules active for one dispatch.
///
/// The same set is used for both phases; the document is not re-read in
/// between.
#[derive(Debug)]
pub struct ActiveSet<'a> {
    entries: Vec<&'a RouteEntry>,
}

impl<'a> ActiveSet<'a> {
    /// Active route names, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'a RouteName> + '_ {
        self.entries.iter().map(|e| e.name())
    }

    /// Active entries, in run order.
    pub fn entries(&self) -> &[&'a RouteEntry] {
        &self.entries
    }

    /// Number of active routes (at least one: `common`).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; `common` is always active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one phase over every active module, stopping at the first error.
    pub fn run(&self, phase: Phase) -> Result<(), HookError> {
        for entry in &self.entries {
            #[cfg(feature = "tracing")]
            tracing::trace!(route = %entry.name(), %phase, "running hook");

            if let Err(source) = entry.module().run(phase) {
                #[cfg(feature = "tracing")]
                tracing::warn!(route = %entry.name(), %phase, error = %source, "hook failed");
                return Err(HookError::new(entry.name().clone(), phase, source));
            }
        }
        Ok(())
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    routes: Vec<RouteName>,
}

impl DispatchReport {
    /// The routes whose hooks ran, in order.
    pub fn routes(&self) -> &[RouteName] {
        &self.routes
    }
}
