use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// A URL-safe identifier for a module, lesson, or diagram.
///
/// Format: one or more lowercase alphanumeric segments separated by single
/// hyphens (e.g. `what-is-kubernetes`, `k8s-architecture`). Slugs are
/// compared with exact, case-sensitive string equality.
///
/// A module slug is unique across the catalog. A lesson slug is only unique
/// within its owning module, so lesson lookups are always scoped by
/// `(module slug, lesson slug)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(NonEmptyString);

impl Slug {
    /// Creates a new `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the string is empty, contains characters other
    /// than lowercase letters, digits, and hyphens, or has a leading,
    /// trailing, or doubled hyphen.
    pub fn new(s: String) -> Result<Self, Error> {
        if !s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(Error(s));
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(Error(s));
        }

        let non_empty = NonEmptyString::new(s).map_err(Error)?;
        Ok(Self(non_empty))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Error returned when a string is not a valid slug.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "invalid slug '{0}': must be non-empty lowercase alphanumeric segments separated by single \
     hyphens"
)]
pub struct Error(String);

impl TryFrom<String> for Slug {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Slug {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for Slug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0.as_str().to_owned()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Slug {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
