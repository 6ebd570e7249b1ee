//! # Activation Context
//!
//! The class tokens on the document root, as emitted by the server-side
//! template. This is the only input the dispatcher reads from the page.

use crate::error::BoxError;
use std::collections::BTreeSet;

/// The set of class tokens on the document root.
///
/// Recomputed for every dispatch; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationContext {
    tokens: BTreeSet<String>,
}

impl ActivationContext {
    /// An empty context (only `common` will activate).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `class` attribute value.
    ///
    /// Tokens are separated by ASCII whitespace; empty tokens are dropped and
    /// duplicates collapse.
    pub fn parse(class_attr: &str) -> Self {
        Self {
            tokens: class_attr
                .split_ascii_whitespace()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Whether the root carries exactly this token.
    ///
    /// Matching is case-sensitive string equality: `home` does not match
    /// `home-page` or `Home`.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Iterate over the tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the root carries no class at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Each item is split like a `class` attribute, so `["home page"]` yields
/// the tokens `home` and `page`.
impl<S: AsRef<str>> FromIterator<S> for ActivationContext {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tokens = BTreeSet::new();
        for item in iter {
            tokens.extend(item.as_ref().split_ascii_whitespace().map(str::to_owned));
        }
        Self { tokens }
    }
}

/// Read-only access to the document root's class list.
///
/// Implemented by host adapters (e.g. the browser's `document.body`) and by
/// plain strings for tests and server-side use.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot provide document classes",
    label = "missing `ClassSource` implementation",
    note = "Implement `ClassSource` to expose the document root class list."
)]
pub trait ClassSource {
    /// Read the current class list.
    fn activation_context(&self) -> Result<ActivationContext, BoxError>;
}

impl ClassSource for str {
    fn activation_context(&self) -> Result<ActivationContext, BoxError> {
        Ok(ActivationContext::parse(self))
    }
}

impl ClassSource for String {
    fn activation_context(&self) -> Result<ActivationContext, BoxError> {
        Ok(ActivationContext::parse(self))
    }
}

impl ClassSource for ActivationContext {
    fn activation_context(&self) -> Result<ActivationContext, BoxError> {
        Ok(self.clone())
    }
}

impl<T: ClassSource + ?Sized> ClassSource for &T {
    fn activation_context(&self) -> Result<ActivationContext, BoxError> {
        (**self).activation_context()
    }
}
