use serde::{Deserialize, Serialize};

use crate::release::Release;
use crate::variable::NamedRef;

/// A table within a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
    pub name: String,
}

/// A variable addressed through its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableRef>,
    pub name: String,
}

/// Links a source table to a harmonised target variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMapping {
    pub from_table: TableRef,
    pub to_variable: VariableRef,
    /// How well the source matches, e.g. `complete` or `partial`.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_kind: Option<NamedRef>,
}

impl VariableMapping {
    pub fn match_name(&self) -> Option<&str> {
        self.match_kind.as_ref().map(|m| m.name.as_str())
    }

    pub fn target_name(&self) -> &str {
        &self.to_variable.name
    }

    pub fn source_table_name(&self) -> &str {
        &self.from_table.name
    }

    /// The release the source table belongs to, if the server sent it.
    pub fn source_release(&self) -> Option<&Release> {
        self.from_table.release.as_ref()
    }
}
