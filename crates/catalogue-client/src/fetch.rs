//! Fetch operations: one per entity type.
//!
//! Each operation reads what it needs from a [`CatalogueContext`], composes
//! the query variables, executes the query and, only once the whole response
//! has decoded, writes the result into the context's cache. A failed
//! operation leaves the cache exactly as it was.

use catalogue_model::{Cohort, Keyword, Release, Variable, VariableDetail, VariableMapping};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheMutation, DetailEntry};
use crate::config::CatalogueSettings;
use crate::context::CatalogueContext;
use crate::error::{CatalogueError, Result};
use crate::filter::{mappings_variables, variable_detail_filter, variables_filter};
use crate::query::{
    CohortsData, KeywordsData, Operation, VariableDetailData, VariableMappingsData, VariablesArgs,
    VariablesData,
};
use crate::transport::Transport;

/// One page of the variable overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePage {
    pub variables: Vec<Variable>,
    /// Number of variables matching the filter across all pages.
    pub count: u64,
}

/// Runs catalogue queries for a single release.
#[derive(Debug, Clone)]
pub struct CatalogueFetcher<T> {
    release: Release,
    transport: T,
}

impl<T: Transport> CatalogueFetcher<T> {
    pub fn new(release: Release, transport: T) -> Self {
        Self { release, transport }
    }

    pub fn from_settings(settings: &CatalogueSettings, transport: T) -> Self {
        Self::new(settings.release(), transport)
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes `operation` and decodes its `data` object.
    async fn run<R: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: Option<Value>,
    ) -> Result<R> {
        debug!(operation = operation.name(), "Executing query");
        let document = operation.document();
        let data = match self.transport.execute(document, variables).await {
            Ok(data) => data,
            Err(error) => {
                warn!(operation = operation.name(), %error, "Query failed");
                return Err(error);
            }
        };
        serde_json::from_value(data).map_err(|e| {
            warn!(operation = operation.name(), error = %e, "Unexpected response shape");
            CatalogueError::Decode(format!("{operation}: {e}"))
        })
    }

    /// Refreshes the variable overview from the current selection.
    ///
    /// Always queries the server. On success the cached variable list and
    /// count are both replaced; on failure neither is touched.
    #[instrument(skip_all, fields(keywords = ctx.selection.selected_keywords().len()))]
    pub async fn fetch_variables(&self, ctx: &mut CatalogueContext) -> Result<VariablePage> {
        let args = VariablesArgs {
            search: ctx.selection.search().map(str::to_string),
            filter: variables_filter(&self.release, ctx.selection.selected_keywords())?,
        };
        let data: VariablesData = self
            .run(Operation::Variables, Some(serde_json::to_value(&args)?))
            .await?;

        let page = VariablePage {
            variables: data.variables,
            count: data.aggregate.count,
        };
        ctx.cache.apply_all([
            CacheMutation::SetVariables(page.variables.clone()),
            CacheMutation::SetVariableCount(page.count),
        ]);
        info!(
            shown = page.variables.len(),
            total = page.count,
            "Variables fetched"
        );
        Ok(page)
    }

    /// Returns the detail record for `name`, fetching it at most once.
    ///
    /// A cached entry, including a cached "not found", answers without any
    /// network call. A name the server does not know is remembered as not
    /// found and reported as [`CatalogueError::VariableNotFound`]. The
    /// lookup is a `like` match, so a record under any other name counts as
    /// not found.
    #[instrument(skip(self, ctx))]
    pub async fn fetch_variable_detail(
        &self,
        ctx: &mut CatalogueContext,
        name: &str,
    ) -> Result<VariableDetail> {
        if let Some(entry) = ctx.cache.variable_detail(name) {
            debug!("Variable detail cache hit");
            return entry.clone().into_result(name);
        }

        let args = VariablesArgs {
            search: None,
            filter: variable_detail_filter(&self.release, name)?,
        };
        let data: VariableDetailData = self
            .run(Operation::VariableDetail, Some(serde_json::to_value(&args)?))
            .await?;

        let entry = match data.variables.into_iter().next() {
            Some(detail) if detail.name == name => DetailEntry::Found(detail),
            Some(detail) => {
                warn!(returned = %detail.name, "Detail query matched a different variable");
                DetailEntry::NotFound
            }
            None => {
                warn!("No variable with this name in release {}", self.release);
                DetailEntry::NotFound
            }
        };
        ctx.cache.apply(CacheMutation::SetVariableDetails {
            name: name.to_string(),
            detail: entry.clone(),
        });
        entry.into_result(name)
    }

    /// Replaces the cached keyword taxonomy.
    #[instrument(skip_all)]
    pub async fn fetch_keywords(&self, ctx: &mut CatalogueContext) -> Result<Vec<Keyword>> {
        let data: KeywordsData = self.run(Operation::Keywords, None).await?;
        ctx.cache
            .apply(CacheMutation::SetKeywords(data.keywords.clone()));
        info!(count = data.keywords.len(), "Keywords fetched");
        Ok(data.keywords)
    }

    /// Replaces the cached cohort list.
    #[instrument(skip_all)]
    pub async fn fetch_cohorts(&self, ctx: &mut CatalogueContext) -> Result<Vec<Cohort>> {
        let data: CohortsData = self.run(Operation::Cohorts, None).await?;
        ctx.cache
            .apply(CacheMutation::SetCohorts(data.cohorts.clone()));
        info!(count = data.cohorts.len(), "Cohorts fetched");
        Ok(data.cohorts)
    }

    /// Replaces the cached mappings with those targeting the cached variables.
    ///
    /// With no cached variables the query carries no filter and returns
    /// mappings for any variable, up to the page limit.
    #[instrument(skip_all, fields(variables = ctx.cache.variables().len()))]
    pub async fn fetch_mappings(
        &self,
        ctx: &mut CatalogueContext,
    ) -> Result<Vec<VariableMapping>> {
        let names = ctx.cache.variables().iter().map(|v| v.name.as_str());
        let variables = mappings_variables(&self.release, names)?;
        let data: VariableMappingsData = self
            .run(
                Operation::VariableMappings,
                Some(serde_json::to_value(&variables)?),
            )
            .await?;

        ctx.cache
            .apply(CacheMutation::SetVariableMappings(data.mappings.clone()));
        info!(count = data.mappings.len(), "Variable mappings fetched");
        Ok(data.mappings)
    }

    /// Refreshes the overview and then the mappings for it.
    ///
    /// Stops at the first failure; mappings are not fetched for a stale
    /// variable list.
    pub async fn refresh(&self, ctx: &mut CatalogueContext) -> Result<VariablePage> {
        let page = self.fetch_variables(ctx).await?;
        self.fetch_mappings(ctx).await?;
        Ok(page)
    }
}
