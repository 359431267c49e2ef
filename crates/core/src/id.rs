//! Opaque entity identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, immutable identifier assigned to an entity at creation.
///
/// Generated as UUIDv7 text, but any string read back from storage is accepted
/// as-is: callers must not rely on its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Oid(String);

impl Oid {
    /// Create a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for Oid {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for Oid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Oid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Oid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Oid> for String {
    fn from(value: Oid) -> Self {
        value.0
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
