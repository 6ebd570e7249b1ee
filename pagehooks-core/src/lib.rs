//! # pagehooks-core
//!
//! Core contracts for dispatching page behavior on server-rendered,
//! multi-page sites.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! behavior modules that don't need the registry or dispatcher from
//! `pagehooks-std`.
//!
//! # Model
//!
//! ## Behavior ([`Module`])
//!
//! A named unit of page behavior exposing two lifecycle hooks, `init` and
//! `finalize`. The dispatcher calls every `init` first, then every
//! `finalize`, always in the same order.
//!
//! ## Dispatch key ([`RouteName`])
//!
//! A module is active on a page iff the page template emitted a root class
//! token equal to its route name. The distinguished [`COMMON`] route runs on
//! every page, first.
//!
//! ## Page view ([`ActivationContext`], [`ClassSource`])
//!
//! The set of class tokens on the document root, read fresh for every
//! dispatch.
//!
//! # Error Types
//!
//! - [`PageError`] - Top-level error type
//! - [`RouteError`] - Registration errors
//! - [`HookError`] - A lifecycle hook failed
//! - [`CallbackError`] - Callback lookup errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod module;
mod route;

// Re-exports
pub use context::{ActivationContext, ClassSource};
pub use error::{BoxError, CallbackError, HookError, PageError, RouteError};
pub use module::{FnModule, Module, Phase};
pub use route::{COMMON, RouteName};
