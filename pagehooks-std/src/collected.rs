//! Routes collected from across the codebase via `inventory`.
//!
//! Page modules can live next to the templates they serve and register
//! themselves with [`submit_route!`](crate::submit_route). Link order is
//! unspecified, so every submission carries an explicit `order`.

use crate::registry::RouteRegistryBuilder;
use pagehooks_core::{Module, RouteError, RouteName};

/// A route submitted to the global collection.
pub struct CollectedRoute {
    /// Route name.
    pub name: &'static str,
    /// Position in the registry (lower registers first).
    pub order: i32,
    /// Creates the module.
    pub factory: fn() -> Box<dyn Module>,
}

impl CollectedRoute {
    /// Create a new collected route entry.
    pub const fn new(name: &'static str, order: i32, factory: fn() -> Box<dyn Module>) -> Self {
        Self {
            name,
            order,
            factory,
        }
    }
}

inventory::collect!(CollectedRoute);

/// Submits a route to the global collection.
///
/// The module expression is evaluated when the registry is built.
///
/// # Example
/// ```rust,ignore
/// submit_route!("home", 10, HomePage::default());
/// ```
#[macro_export]
macro_rules! submit_route {
    ($name:literal, $order:expr, $module:expr) => {
        const _: () = {
            fn factory() -> ::std::boxed::Box<dyn $crate::pagehooks_core::Module> {
                ::std::boxed::Box::new($module)
            }
            $crate::inventory::submit! {
                $crate::collected::CollectedRoute::new($name, $order, factory)
            }
        };
    };
}

impl RouteRegistryBuilder {
    /// A builder pre-filled with every submitted route, sorted by
    /// `(order, name)`.
    pub fn collected() -> Result<Self, RouteError> {
        let mut routes: Vec<&CollectedRoute> =
            inventory::iter::<CollectedRoute>.into_iter().collect();
        routes.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));

        let mut builder = Self::new();
        for route in routes {
            builder.register_boxed(RouteName::new(route.name)?, (route.factory)())?;
        }
        Ok(builder)
    }
}
