//! Route names: the dispatch keys shared with the page template.

use crate::error::RouteError;
use std::{borrow::Borrow, fmt, sync::Arc};

/// Name of the route that runs on every page.
pub const COMMON: &str = "common";

/// A validated route name.
///
/// A route is active on a page iff the document root carries a class token
/// *exactly* equal to its name, so a name must itself be a legal class token:
/// non-empty and free of ASCII whitespace.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteName(Arc<str>);

impl RouteName {
    /// Validate `name` as a route name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, RouteError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(RouteError::InvalidName {
                name: name.to_owned(),
                reason: "name is empty",
            });
        }
        if name.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(RouteError::InvalidName {
                name: name.to_owned(),
                reason: "name contains whitespace and can never match a class token",
            });
        }
        Ok(Self(Arc::from(name)))
    }

    /// The `common` route name.
    pub fn common() -> Self {
        Self(Arc::from(COMMON))
    }

    /// Whether this is the `common` route.
    pub fn is_common(&self) -> bool {
        &*self.0 == COMMON
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RouteName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for RouteName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl TryFrom<&str> for RouteName {
    type Error = RouteError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RouteName {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_class_tokens() {
        for name in ["home", "transaction", "page-template-default", "é", "a_b"] {
            assert_eq!(RouteName::new(name).unwrap(), name);
        }
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(
            RouteName::new(""),
            Err(RouteError::InvalidName { reason: "name is empty", .. })
        ));
        for name in ["home page", " home", "home\t", "a\nb", "x\u{c}y", "x\ry"] {
            assert!(RouteName::new(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn common_is_distinguished() {
        assert!(RouteName::common().is_common());
        assert!(RouteName::new("common").unwrap().is_common());
        assert!(!RouteName::new("Common").unwrap().is_common());
    }
}
