//! Error types for pagehooks.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PageError`] - Top-level error type for all dispatch operations
//! - [`RouteError`] - Errors while building a route registry
//! - [`HookError`] - A module's `init` or `finalize` failed
//! - [`CallbackError`] - Errors resolving published callbacks

use crate::{module::Phase, route::RouteName};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all pagehooks operations.
#[derive(Error, Debug)]
pub enum PageError {
    /// The route configuration is invalid.
    #[error("route error: {0}")]
    Route(#[from] RouteError),

    /// A lifecycle hook failed during dispatch.
    #[error(transparent)]
    Hook(#[from] HookError),

    /// A published callback could not be resolved.
    #[error("callback error: {0}")]
    Callback(#[from] CallbackError),

    /// The document root class list could not be read.
    #[error("failed to read document classes")]
    Document(#[source] BoxError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(#[from] BoxError),
}

/// Errors that can occur while building a route registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The name cannot appear as a class token.
    #[error("invalid route name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The route was already registered and duplicates are rejected.
    #[error("route already registered: {0}")]
    Duplicate(String),

    /// No `common` module was registered.
    #[error("registry has no `common` route")]
    MissingCommon,
}

/// A module's lifecycle hook returned an error.
///
/// The dispatcher stops at the first failing hook; no later hook of the same
/// dispatch runs.
#[derive(Error, Debug)]
#[error("{phase} hook of route `{route}` failed")]
pub struct HookError {
    /// The route whose hook failed.
    pub route: RouteName,
    /// The phase that was running.
    pub phase: Phase,
    /// The error raised by the hook.
    #[source]
    pub source: BoxError,
}

impl HookError {
    /// Create a new hook error.
    pub fn new(route: RouteName, phase: Phase, source: BoxError) -> Self {
        Self {
            route,
            phase,
            source,
        }
    }
}

/// Errors that can occur resolving published callbacks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// Nothing was published under the name.
    #[error("no {kind} published under {name:?}")]
    NotFound {
        /// The kind of callback looked up (e.g. `formatter`).
        kind: &'static str,
        /// The requested name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn hook_error_names_route_and_phase() {
        let err = HookError::new(RouteName::common(), Phase::Finalize, "boom".into());
        assert_eq!(err.to_string(), "finalize hook of route `common` failed");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("boom"));
    }

    #[test]
    fn boxed_errors_are_not_document_errors() {
        fn fails() -> Result<(), PageError> {
            Err::<(), BoxError>("widget config missing".into())?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, PageError::Custom(_)));
        assert_eq!(err.to_string(), "widget config missing");
    }

    #[test]
    fn page_error_wraps_route_error() {
        let err: PageError = RouteError::MissingCommon.into();
        assert!(matches!(err, PageError::Route(RouteError::MissingCommon)));
        assert_eq!(err.to_string(), "route error: registry has no `common` route");
    }
}
