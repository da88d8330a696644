use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to the resource (databank or network) that owns a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub acronym: String,
}

/// A versioned dataset snapshot, keyed by resource acronym and version.
///
/// Serializes as `{"resource": {"acronym": ...}, "version": ...}`, which is
/// both the response shape and the shape expected inside query filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Release {
    pub resource: ResourceRef,
    pub version: String,
}

impl Release {
    pub fn new(acronym: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            resource: ResourceRef {
                acronym: acronym.into(),
            },
            version: version.into(),
        }
    }

    pub fn acronym(&self) -> &str {
        &self.resource.acronym
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.resource.acronym, self.version)
    }
}
