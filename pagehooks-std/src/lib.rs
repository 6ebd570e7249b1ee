//! # pagehooks-std
//!
//! Standard implementations for the pagehooks dispatch model.
//!
//! This crate provides:
//! - **Registry**: [`RouteRegistry`], [`RouteRegistryBuilder`], [`routes!`] macro
//! - **Dispatch**: [`Router`] and its [`ActiveSet`] / [`DispatchReport`]
//! - **Callbacks**: [`CallbackRegistry`] for widget formatters and comparators
//! - **Standard hooks**: [`hooks::Instrumented`]
//! - **Testing**: recording and failing modules

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use pagehooks_core;

// Modules
pub mod callbacks;
#[cfg(feature = "inventory")]
pub mod collected;
pub mod dispatch;
pub mod hooks;
mod macros;
pub mod registry;
pub mod testing;

pub use callbacks::{CallbackRegistry, Comparator, Formatter, WidgetCallbacks};
pub use dispatch::{ActiveSet, DispatchReport, Router};
pub use registry::{DuplicatePolicy, RouteEntry, RouteRegistry, RouteRegistryBuilder};

#[cfg(feature = "inventory")]
pub use inventory;
