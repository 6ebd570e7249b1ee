//! Standard module wrappers.

pub mod instrument;

pub use instrument::Instrumented;
