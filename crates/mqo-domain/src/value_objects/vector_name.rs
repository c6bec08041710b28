//! Vector Name Value Object
//!
//! Stable identifier under which a model's vectors are stored in the
//! vector database schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    VECTOR_NAME_REPLACEMENT, VECTOR_NAME_RESERVED_CHARS, VECTOR_NAME_SEPARATOR,
};

/// Value Object: Vector Name
///
/// Derived from a backend tag and a model identifier as
/// `"<backend-tag>-<sanitized-model>"`, where sanitization maps every `:`
/// and `/` to `_` and leaves all other characters untouched.
///
/// ## Example
///
/// ```rust
/// use mqo_domain::VectorName;
///
/// let name = VectorName::from_model("ollama", "llama2:7b");
/// assert_eq!(name.as_str(), "ollama-llama2_7b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorName(String);

impl VectorName {
    /// Derive the vector name for `model` served by `backend_tag`
    pub fn from_model(backend_tag: &str, model: &str) -> Self {
        let mut name = String::with_capacity(backend_tag.len() + 1 + model.len());
        name.push_str(backend_tag);
        name.push(VECTOR_NAME_SEPARATOR);
        name.extend(model.chars().map(sanitize_char));
        Self(name)
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn sanitize_char(c: char) -> char {
    if VECTOR_NAME_RESERVED_CHARS.contains(&c) {
        VECTOR_NAME_REPLACEMENT
    } else {
        c
    }
}

impl fmt::Display for VectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VectorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VectorName> for String {
    fn from(name: VectorName) -> Self {
        name.0
    }
}
