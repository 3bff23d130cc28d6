//! Schema namespace casing.
//!
//! The canonical module name is the schema namespace with its first character
//! uppercased. It is computed once, wrapped in [`CanonicalName`], and reused
//! wherever the generated artifacts need the module name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Uppercase the first character of `namespace`, leaving the rest untouched.
///
/// Characters whose uppercase form expands (such as `ß`) expand in place;
/// [`SchemaNamespace`] rejects them, so canonical names never change length.
pub fn canonicalize(namespace: &str) -> String {
    let mut chars = namespace.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A validated, user-supplied schema namespace.
///
/// Construction rejects empty strings and anything that is not a Swift-style
/// identifier starting with a letter. The first letter must uppercase to a
/// single character, so the canonical name always has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaNamespace(String);

impl SchemaNamespace {
    pub fn new(namespace: impl Into<String>) -> ConfigResult<Self> {
        let namespace = namespace.into();
        let mut chars = namespace.chars();
        let Some(first) = chars.next() else {
            return Err(ConfigError::EmptyNamespace);
        };

        let valid_first = first.is_alphabetic() && first.to_uppercase().count() == 1;
        let valid_rest = chars.all(|c| c.is_alphanumeric() || c == '_');
        if valid_first && valid_rest {
            Ok(Self(namespace))
        } else {
            Err(ConfigError::InvalidNamespace(namespace))
        }
    }

    /// The namespace exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical module name derived from this namespace.
    pub fn canonical(&self) -> CanonicalName {
        CanonicalName(canonicalize(&self.0))
    }
}

impl TryFrom<String> for SchemaNamespace {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        Self::new(value)
    }
}

impl From<SchemaNamespace> for String {
    fn from(value: SchemaNamespace) -> Self {
        value.0
    }
}

impl fmt::Display for SchemaNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Module name used for the package, its primary product and primary target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
