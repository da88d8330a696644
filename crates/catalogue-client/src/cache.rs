//! Session cache of fetched catalogue data.
//!
//! Collections are replaced wholesale by each successful fetch. Variable
//! details are memoized per name for the lifetime of the cache: entries are
//! never evicted or overwritten, so dropping the cache (a session reload) is
//! the only way to see server-side changes to a detail record.

use std::collections::HashMap;

use catalogue_model::{Cohort, Keyword, KeywordTree, Variable, VariableDetail, VariableMapping};

use crate::error::{CatalogueError, Result};

/// Outcome of a detail fetch, as remembered by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEntry {
    Found(VariableDetail),
    /// The server had no variable with this name.
    NotFound,
}

impl DetailEntry {
    pub fn found(&self) -> Option<&VariableDetail> {
        match self {
            Self::Found(detail) => Some(detail),
            Self::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Turns the entry into the answer for a request for `name`.
    pub fn into_result(self, name: &str) -> Result<VariableDetail> {
        match self {
            Self::Found(detail) => Ok(detail),
            Self::NotFound => Err(CatalogueError::VariableNotFound(name.to_string())),
        }
    }
}

/// A write to the cache. Each variant replaces or inserts exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheMutation {
    SetVariables(Vec<Variable>),
    SetVariableCount(u64),
    SetVariableDetails { name: String, detail: DetailEntry },
    SetKeywords(Vec<Keyword>),
    SetCohorts(Vec<Cohort>),
    SetVariableMappings(Vec<VariableMapping>),
}

impl CacheMutation {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SetVariables(_) => "setVariables",
            Self::SetVariableCount(_) => "setVariableCount",
            Self::SetVariableDetails { .. } => "setVariableDetails",
            Self::SetKeywords(_) => "setKeywords",
            Self::SetCohorts(_) => "setCohorts",
            Self::SetVariableMappings(_) => "setVariableMappings",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogueCache {
    variables: Vec<Variable>,
    variable_count: u64,
    variable_details: HashMap<String, DetailEntry>,
    keywords: Vec<Keyword>,
    cohorts: Vec<Cohort>,
    variable_mappings: Vec<VariableMapping>,
}

impl CatalogueCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, mutation: CacheMutation) {
        tracing::trace!(mutation = mutation.label(), "Applying cache mutation");
        match mutation {
            CacheMutation::SetVariables(variables) => self.variables = variables,
            CacheMutation::SetVariableCount(count) => self.variable_count = count,
            CacheMutation::SetVariableDetails { name, detail } => {
                self.variable_details.entry(name).or_insert(detail);
            }
            CacheMutation::SetKeywords(keywords) => self.keywords = keywords,
            CacheMutation::SetCohorts(cohorts) => self.cohorts = cohorts,
            CacheMutation::SetVariableMappings(mappings) => self.variable_mappings = mappings,
        }
    }

    /// Applies mutations in order.
    pub fn apply_all(&mut self, mutations: impl IntoIterator<Item = CacheMutation>) {
        for mutation in mutations {
            self.apply(mutation);
        }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Total number of variables matching the last overview filter, which may
    /// exceed `variables().len()` because the overview is paged.
    pub fn variable_count(&self) -> u64 {
        self.variable_count
    }

    pub fn variable_detail(&self, name: &str) -> Option<&DetailEntry> {
        self.variable_details.get(name)
    }

    pub fn variable_details(&self) -> &HashMap<String, DetailEntry> {
        &self.variable_details
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Arranges the cached keywords as a taxonomy.
    pub fn keyword_tree(&self) -> catalogue_model::Result<KeywordTree> {
        KeywordTree::build(self.keywords.clone())
    }

    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    pub fn cohorts_of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Cohort> {
        self.cohorts.iter().filter(move |c| c.is_type(kind))
    }

    pub fn variable_mappings(&self) -> &[VariableMapping] {
        &self.variable_mappings
    }

    /// Mappings whose target is the named variable.
    pub fn mappings_for<'a>(
        &'a self,
        variable_name: &'a str,
    ) -> impl Iterator<Item = &'a VariableMapping> {
        self.variable_mappings
            .iter()
            .filter(move |m| m.target_name() == variable_name)
    }
}
