//! The fixed set of GraphQL operations this client issues.
//!
//! Each operation pairs a static query document with the shape of the
//! variables it takes and the shape of the `data` it returns.

use std::fmt;

use catalogue_model::de::null_as_empty;
use catalogue_model::{Cohort, Keyword, Variable, VariableDetail, VariableMapping};
use serde::{Deserialize, Serialize};

use crate::filter::VariablesFilter;

/// Page size of the variable overview.
pub const VARIABLES_PAGE_LIMIT: u32 = 100;

/// Page size of the mappings query.
pub const MAPPINGS_PAGE_LIMIT: u32 = 100;

/// The named operations of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Variable overview plus total count.
    Variables,
    /// One variable with its detail fields.
    VariableDetail,
    /// Full keyword taxonomy.
    Keywords,
    /// All cohorts / databanks.
    Cohorts,
    /// Mappings from source tables onto target variables.
    VariableMappings,
}

impl Operation {
    pub const ALL: [Self; 5] = [
        Self::Variables,
        Self::VariableDetail,
        Self::Keywords,
        Self::Cohorts,
        Self::VariableMappings,
    ];

    /// The GraphQL operation name, as sent in `operationName`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Variables => "Variables",
            Self::VariableDetail => "VariableDetail",
            Self::Keywords => "Keywords",
            Self::Cohorts => "Databanks",
            Self::VariableMappings => "VariableMappings",
        }
    }

    /// Top-level field of the `data` object holding the records.
    #[must_use]
    pub const fn root_field(self) -> &'static str {
        match self {
            Self::Variables | Self::VariableDetail => "Variables",
            Self::Keywords => "Keywords",
            Self::Cohorts => "Databanks",
            Self::VariableMappings => "VariableMappings",
        }
    }

    /// Maximum number of records returned; `None` when unbounded.
    #[must_use]
    pub const fn page_limit(self) -> Option<u32> {
        match self {
            Self::Variables => Some(VARIABLES_PAGE_LIMIT),
            Self::VariableDetail => Some(1),
            Self::VariableMappings => Some(MAPPINGS_PAGE_LIMIT),
            Self::Keywords | Self::Cohorts => None,
        }
    }

    #[must_use]
    pub fn document(self) -> &'static QueryDocument {
        match self {
            Self::Variables => &VARIABLES,
            Self::VariableDetail => &VARIABLE_DETAIL,
            Self::Keywords => &KEYWORDS,
            Self::Cohorts => &COHORTS,
            Self::VariableMappings => &VARIABLE_MAPPINGS,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A static, parameterized GraphQL query.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryDocument {
    pub operation: Operation,
    pub text: &'static str,
}

pub static VARIABLES: QueryDocument = QueryDocument {
    operation: Operation::Variables,
    text: r"query Variables($search: String, $filter: VariablesFilter) {
  Variables(limit: 100, search: $search, filter: $filter) {
    name
    release {
      resource {
        acronym
      }
      version
    }
    label
    repeats {
      name
    }
  }
  Variables_agg(filter: $filter) {
    count
  }
}",
};

pub static VARIABLE_DETAIL: QueryDocument = QueryDocument {
    operation: Operation::VariableDetail,
    text: r"query VariableDetail($filter: VariablesFilter) {
  Variables(limit: 1, filter: $filter) {
    name
    label
    format {
      name
    }
    unit {
      name
    }
    description
    repeats {
      name
    }
  }
}",
};

pub static KEYWORDS: QueryDocument = QueryDocument {
    operation: Operation::Keywords,
    text: r"query Keywords {
  Keywords {
    name
    definition
    order
    parent {
      name
    }
  }
}",
};

pub static COHORTS: QueryDocument = QueryDocument {
    operation: Operation::Cohorts,
    text: r"query Databanks {
  Databanks {
    acronym
    name
    type {
      name
    }
  }
}",
};

pub static VARIABLE_MAPPINGS: QueryDocument = QueryDocument {
    operation: Operation::VariableMappings,
    text: r"query VariableMappings($filter: VariableMappingsFilter) {
  VariableMappings(limit: 100, filter: $filter) {
    fromTable {
      release {
        resource {
          acronym
        }
        version
      }
      name
    }
    toVariable {
      table {
        release {
          resource {
            acronym
          }
          version
        }
        name
      }
      name
    }
    match {
      name
    }
  }
}",
};

/// Variables for the `Variables` and `VariableDetail` operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariablesArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub filter: VariablesFilter,
}

/// `Variables_agg { count }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Aggregate {
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariablesData {
    #[serde(rename = "Variables", default, deserialize_with = "null_as_empty")]
    pub variables: Vec<Variable>,
    #[serde(rename = "Variables_agg")]
    pub aggregate: Aggregate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariableDetailData {
    #[serde(rename = "Variables", default, deserialize_with = "null_as_empty")]
    pub variables: Vec<VariableDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsData {
    #[serde(rename = "Keywords", default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CohortsData {
    #[serde(rename = "Databanks", default, deserialize_with = "null_as_empty")]
    pub cohorts: Vec<Cohort>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariableMappingsData {
    #[serde(rename = "VariableMappings", default, deserialize_with = "null_as_empty")]
    pub mappings: Vec<VariableMapping>,
}
