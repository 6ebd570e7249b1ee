//! Named callbacks published by modules for declaratively configured widgets.
//!
//! Table widgets are configured with callback *names* (a column's formatter,
//! a column's sort comparator). Instead of hanging those functions off global
//! scope, a module publishes them into a [`CallbackRegistry`] during `init`,
//! and the widget resolves them by name.
//!
//! # Example
//!
//! ```rust
//! use pagehooks_std::WidgetCallbacks;
//! use std::{cmp::Ordering, sync::Arc};
//!
//! let callbacks = WidgetCallbacks::new();
//! callbacks
//!     .comparators
//!     .publish("by_length", Arc::new(|a: &str, b: &str| a.len().cmp(&b.len())));
//!
//! let cmp = callbacks.comparators.resolve("by_length")?;
//! assert_eq!(cmp("ab", "abc"), Ordering::Less);
//! # Ok::<(), pagehooks_core::CallbackError>(())
//! ```

use pagehooks_core::CallbackError;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

/// Formats a raw cell value for display.
pub type Formatter = dyn Fn(&str) -> String + Send + Sync;

/// Orders two raw cell values.
pub type Comparator = dyn Fn(&str, &str) -> Ordering + Send + Sync;

/// A shareable table of named callbacks.
///
/// Publishing takes `&self` so a module can publish from its `init` hook.
/// Publishing under an existing name replaces the earlier callback.
pub struct CallbackRegistry<F: ?Sized> {
    kind: &'static str,
    entries: RwLock<BTreeMap<String, Arc<F>>>,
}

impl<F: ?Sized> CallbackRegistry<F> {
    /// Create an empty registry; `kind` names the callback kind in errors.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Publish `callback` under `name`, returning the callback it replaced.
    pub fn publish(&self, name: impl Into<String>, callback: Arc<F>) -> Option<Arc<F>> {
        let name = name.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = self.kind, %name, "publishing callback");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, callback)
    }

    /// Look a callback up by name.
    pub fn get(&self, name: &str) -> Option<Arc<F>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Look a callback up by name, failing if it was never published.
    pub fn resolve(&self, name: &str) -> Result<Arc<F>, CallbackError> {
        self.get(name).ok_or_else(|| CallbackError::NotFound {
            kind: self.kind,
            name: name.to_owned(),
        })
    }

    /// Published names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Number of published callbacks.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing was published.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: ?Sized> fmt::Debug for CallbackRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("kind", &self.kind)
            .field("names", &self.names())
            .finish()
    }
}

/// The callbacks a table widget can reference by name.
#[derive(Debug)]
pub struct WidgetCallbacks {
    /// Cell formatters.
    pub formatters: CallbackRegistry<Formatter>,
    /// Column sort comparators.
    pub comparators: CallbackRegistry<Comparator>,
}

impl WidgetCallbacks {
    /// Create empty formatter and comparator tables.
    pub fn new() -> Self {
        Self {
            formatters: CallbackRegistry::new("formatter"),
            comparators: CallbackRegistry::new("comparator"),
        }
    }
}

impl Default for WidgetCallbacks {
    fn default() -> Self {
        Self::new()
    }
}
