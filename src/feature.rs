//! Capability-checked initialization results.

use std::fmt;

/// A DOM element a routine needs but the page does not provide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Missing(pub String);

impl Missing {
    pub fn new(what: impl Into<String>) -> Self {
        Missing(what.into())
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing {}", self.0)
    }
}

/// Whether a routine found everything it needs on this page.
///
/// Pages without a navigation menu or a stats widget are valid, so
/// `Inactive` is a normal outcome rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feature {
    Active,
    Inactive { missing: String },
}

impl Feature {
    pub fn from_binding<T>(binding: &Result<T, Missing>) -> Self {
        match binding {
            Ok(_) => Feature::Active,
            Err(Missing(what)) => Feature::Inactive {
                missing: what.clone(),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Feature::Active)
    }
}
