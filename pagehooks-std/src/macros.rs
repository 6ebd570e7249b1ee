/// Builds a [`RouteRegistry`](crate::RouteRegistry) from a literal route
/// table, in the order written.
///
/// Evaluates to `Result<RouteRegistry, RouteError>`, so it fails on invalid
/// names or a missing `common` route. Repeated names follow the default
/// overwrite policy.
///
/// # Example
///
/// ```rust
/// use pagehooks_std::routes;
/// use pagehooks_core::{FnModule, Module};
///
/// struct Common;
/// impl Module for Common {}
///
/// let registry = routes! {
///     // All pages
///     "common" => Common,
///     // Home page
///     "home" => FnModule::init_only(|| Ok(())),
/// }?;
/// assert!(registry.contains("home"));
/// # Ok::<(), pagehooks_core::RouteError>(())
/// ```
#[macro_export]
macro_rules! routes {
    ($($name:literal => $module:expr),* $(,)?) => {{
        let build = || -> ::core::result::Result<
            $crate::registry::RouteRegistry,
            $crate::pagehooks_core::RouteError,
        > {
            #[allow(unused_mut)]
            let mut builder = $crate::registry::RouteRegistryBuilder::new();
            $( builder.register_mut($name, $module)?; )*
            builder.build()
        };
        build()
    }};
}
