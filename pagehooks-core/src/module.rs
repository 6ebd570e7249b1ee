//! # Behavior Modules
//!
//! A [`Module`] bundles the page-specific behavior activated by one route.
//! It exposes exactly two lifecycle hooks:
//!
//! - **`init`**: set-up work (attach listeners, configure widgets, publish
//!   callbacks)
//! - **`finalize`**: work that must see every other active module's `init`
//!   already done
//!
//! Hooks are plain synchronous calls. Anything a hook schedules for later
//! (timers, requests) is the module's own concern; the dispatcher only
//! guarantees the order in which the hook functions are *called*.

use crate::error::BoxError;
use std::{fmt, sync::Arc};

/// The two lifecycle phases of a dispatch, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Set-up phase. Every active `init` runs before any `finalize`.
    Init,
    /// Post set-up phase.
    Finalize,
}

impl Phase {
    /// Both phases, in the order they run.
    pub const ALL: [Phase; 2] = [Phase::Init, Phase::Finalize];

    /// The lowercase hook name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of page behavior with a two-phase lifecycle.
///
/// Both hooks default to doing nothing, so a module only implements the
/// phase it cares about.
///
/// # Example
///
/// ```rust
/// use pagehooks_core::{BoxError, Module};
///
/// struct Home;
///
/// impl Module for Home {
///     fn init(&self) -> Result<(), BoxError> {
///         // attach listeners for the home page
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a page behavior `Module`",
    label = "missing `Module` implementation",
    note = "Modules must be `Send + Sync + 'static` and may override `init` and `finalize`."
)]
pub trait Module: Send + Sync + 'static {
    /// Called during the init phase.
    fn init(&self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Called during the finalize phase, after every active `init`.
    fn finalize(&self) -> Result<(), BoxError> {
        Ok(())
    }

    /// Run the hook for `phase`.
    fn run(&self, phase: Phase) -> Result<(), BoxError> {
        match phase {
            Phase::Init => self.init(),
            Phase::Finalize => self.finalize(),
        }
    }
}

impl Module for Box<dyn Module> {
    fn init(&self) -> Result<(), BoxError> {
        (**self).init()
    }

    fn finalize(&self) -> Result<(), BoxError> {
        (**self).finalize()
    }
}

impl<M: Module + ?Sized> Module for Arc<M> {
    fn init(&self) -> Result<(), BoxError> {
        (**self).init()
    }

    fn finalize(&self) -> Result<(), BoxError> {
        (**self).finalize()
    }
}

/// A module built from two closures.
pub struct FnModule<I, F> {
    init: I,
    finalize: F,
}

fn noop() -> Result<(), BoxError> {
    Ok(())
}

impl<I, F> FnModule<I, F>
where
    I: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
    F: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
{
    /// Create a module from an `init` and a `finalize` closure.
    pub const fn new(init: I, finalize: F) -> Self {
        Self { init, finalize }
    }
}

impl<I> FnModule<I, fn() -> Result<(), BoxError>>
where
    I: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
{
    /// Create a module with only an `init` hook.
    pub fn init_only(init: I) -> Self {
        Self {
            init,
            finalize: noop as fn() -> Result<(), BoxError>,
        }
    }
}

impl<I, F> Module for FnModule<I, F>
where
    I: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
    F: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn init(&self) -> Result<(), BoxError> {
        (self.init)()
    }

    fn finalize(&self) -> Result<(), BoxError> {
        (self.finalize)()
    }
}
