//! Language tag value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: Locale
///
/// The language tag selecting which version of the backing items a request
/// presents, e.g. `en` or `da-DK`.
///
/// ## Business Rules
///
/// - Tags are non-empty, ASCII-alphanumeric segments separated by `-`
/// - Comparison is exact; no fallback chain is applied here
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a language tag
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(Error::invalid_argument("Locale tag must not be empty"));
        }
        let valid = tag
            .split('-')
            .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(Error::invalid_argument(format!(
                "Invalid locale tag '{tag}': expected ASCII-alphanumeric segments separated by '-'"
            )));
        }
        Ok(Self(tag))
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
