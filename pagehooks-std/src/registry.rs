//! Route registry: the ordered name → module table.
//!
//! Built once at startup through [`RouteRegistryBuilder`] and immutable
//! afterwards. Insertion order is significant: it is the order in which
//! matched modules run.

use pagehooks_core::{Module, RouteError, RouteName};
use std::fmt;

/// What to do when a route name is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the earlier module, keeping the name's original position.
    #[default]
    Overwrite,
    /// Fail with [`RouteError::Duplicate`].
    Reject,
}

/// A registered route and its module.
pub struct RouteEntry {
    name: RouteName,
    module: Box<dyn Module>,
}

impl RouteEntry {
    /// The route name.
    pub fn name(&self) -> &RouteName {
        &self.name
    }

    /// The route's module.
    pub fn module(&self) -> &dyn Module {
        &*self.module
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RouteRegistryBuilder
// ============================================================================

/// Builder for constructing a [`RouteRegistry`].
///
/// # Example
/// ```
/// use pagehooks_core::{FnModule, Module};
/// use pagehooks_std::RouteRegistryBuilder;
///
/// struct Common;
/// impl Module for Common {}
///
/// let registry = RouteRegistryBuilder::new()
///     .register("common", Common)?
///     .register("home", FnModule::init_only(|| Ok(())))?
///     .build()?;
/// assert_eq!(registry.len(), 2);
/// # Ok::<(), pagehooks_core::RouteError>(())
/// ```
#[derive(Debug, Default)]
pub struct RouteRegistryBuilder {
    entries: Vec<RouteEntry>,
    policy: DuplicatePolicy,
}

impl RouteRegistryBuilder {
    /// Create a new empty builder with [`DuplicatePolicy::Overwrite`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-name policy.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a module under `name`.
    pub fn register<M: Module>(mut self, name: &str, module: M) -> Result<Self, RouteError> {
        self.register_mut(name, module)?;
        Ok(self)
    }

    /// Register a module under `name` (mutable version).
    pub fn register_mut<M: Module>(&mut self, name: &str, module: M) -> Result<(), RouteError> {
        self.insert(RouteName::new(name)?, Box::new(module))
    }

    /// Register an already boxed module.
    pub fn register_boxed(
        &mut self,
        name: RouteName,
        module: Box<dyn Module>,
    ) -> Result<(), RouteError> {
        self.insert(name, module)
    }

    fn insert(&mut self, name: RouteName, module: Box<dyn Module>) -> Result<(), RouteError> {
        let policy = self.policy;
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(_) if policy == DuplicatePolicy::Reject => {
                Err(RouteError::Duplicate(name.to_string()))
            }
            Some(existing) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(route = %name, "overwriting registered route");
                existing.module = module;
                Ok(())
            }
            None => {
                self.entries.push(RouteEntry { name, module });
                Ok(())
            }
        }
    }

    /// Build the immutable registry.
    ///
    /// Fails if no `common` route was registered.
    pub fn build(self) -> Result<RouteRegistry, RouteError> {
        let common = self
            .entries
            .iter()
            .position(|e| e.name.is_common())
            .ok_or(RouteError::MissingCommon)?;
        Ok(RouteRegistry {
            entries: self.entries,
            common,
        })
    }

    /// Get the number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// RouteRegistry
// ============================================================================

/// An immutable, ordered table of routes.
///
/// Always contains a `common` route.
#[derive(Debug)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
    common: usize,
}

impl RouteRegistry {
    /// Iterate over all routes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Route names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &RouteName> {
        self.entries.iter().map(|e| &e.name)
    }

    /// Look a route up by name.
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Whether a route is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The `common` route.
    pub fn common(&self) -> &RouteEntry {
        &self.entries[self.common]
    }

    /// Get the number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
