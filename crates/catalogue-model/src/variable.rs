use serde::{Deserialize, Serialize};

use crate::de::null_as_empty;
use crate::release::Release;

/// A `{ name }` reference to another record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A variable as listed by the variable overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Named sub-variables repeating this one, in server order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repeats: Vec<NamedRef>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release: None,
            label: None,
            repeats: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_release(mut self, release: Release) -> Self {
        self.release = Some(release);
        self
    }

    pub fn has_repeats(&self) -> bool {
        !self.repeats.is_empty()
    }

    pub fn repeat_names(&self) -> impl Iterator<Item = &str> {
        self.repeats.iter().map(|r| r.name.as_str())
    }
}

/// The full record returned when a single variable is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDetail {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repeats: Vec<NamedRef>,
}

impl VariableDetail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            format: None,
            unit: None,
            description: None,
            repeats: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn format_name(&self) -> Option<&str> {
        self.format.as_ref().map(|f| f.name.as_str())
    }

    pub fn unit_name(&self) -> Option<&str> {
        self.unit.as_ref().map(|u| u.name.as_str())
    }
}
