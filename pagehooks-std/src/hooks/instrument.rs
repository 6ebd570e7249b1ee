//! Instrumented Module - Observability for lifecycle hooks.

use pagehooks_core::{BoxError, Module, Phase};

/// A module wrapper that runs each hook inside a `tracing` span and logs how
/// long it took.
///
/// Errors pass through unchanged. Without the `tracing` feature this is a
/// plain pass-through.
///
/// # Example
///
/// ```rust
/// use pagehooks_std::{hooks::Instrumented, routes};
/// use pagehooks_core::Module;
///
/// struct Charts;
/// impl Module for Charts {}
///
/// let registry = routes! {
///     "common" => Instrumented::new(Charts, "donut_charts"),
/// }?;
/// # Ok::<(), pagehooks_core::RouteError>(())
/// ```
pub struct Instrumented<M> {
    inner: M,
    label: &'static str,
}

impl<M> Instrumented<M> {
    /// Wrap `inner`, labelling its spans with `label`.
    pub const fn new(inner: M, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// The wrapped module.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// The span label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[cfg(feature = "tracing")]
    fn observe(
        &self,
        phase: Phase,
        hook: impl FnOnce() -> Result<(), BoxError>,
    ) -> Result<(), BoxError> {
        let _span = tracing::debug_span!("hook", module = self.label, %phase).entered();
        let started = std::time::Instant::now();
        let result = hook();
        let elapsed = started.elapsed();
        match &result {
            Ok(()) => tracing::debug!(?elapsed, "hook finished"),
            Err(error) => tracing::warn!(?elapsed, %error, "hook failed"),
        }
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn observe(
        &self,
        _phase: Phase,
        hook: impl FnOnce() -> Result<(), BoxError>,
    ) -> Result<(), BoxError> {
        hook()
    }
}

impl<M: Module> Module for Instrumented<M> {
    fn init(&self) -> Result<(), BoxError> {
        self.observe(Phase::Init, || self.inner.init())
    }

    fn finalize(&self) -> Result<(), BoxError> {
        self.observe(Phase::Finalize, || self.inner.finalize())
    }
}
