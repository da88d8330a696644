use serde::{Deserialize, Serialize};

use crate::variable::NamedRef;

/// A cohort or other databank contributing data to the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    pub acronym: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Categorical tag such as `cohort` or `harmonisation`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NamedRef>,
}

impl Cohort {
    pub fn type_name(&self) -> Option<&str> {
        self.kind.as_ref().map(|k| k.name.as_str())
    }

    /// Case-insensitive check against the type tag.
    pub fn is_type(&self, name: &str) -> bool {
        self.type_name()
            .is_some_and(|kind| kind.eq_ignore_ascii_case(name))
    }
}
