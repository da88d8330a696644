//! Query composition and session caching for the research-variable catalogue.
//!
//! This crate sits between a UI and the catalogue's GraphQL endpoint. It turns
//! the user's selection (chosen keywords, free-text search) into correctly
//! scoped queries, runs them through a [`Transport`], and keeps the results in
//! a [`CatalogueCache`] so repeated renders do not refetch the same data.
//!
//! # Overview
//!
//! - [`filter`] builds the nested `filter` objects from selection state.
//! - [`query`] holds the five query documents and their result shapes.
//! - [`transport`] defines the [`Transport`] contract and an HTTP implementation.
//! - [`fetch`] runs one operation per entity type and updates the cache.
//! - [`cache`] stores the last results and the per-variable detail memo.
//!
//! All queries are scoped to the single release named in [`CatalogueSettings`].
//!
//! # Cache freshness
//!
//! List fetches (variables, keywords, cohorts, mappings) always go to the
//! server and replace what was cached. Variable details are fetched once per
//! name and kept for the life of the cache, including "not found" answers.
//!
//! # Example
//!
//! ```no_run
//! use catalogue_client::{
//!     CatalogueContext, CatalogueFetcher, CatalogueSettings, HttpTransport, Selection,
//! };
//!
//! async fn show_diabetes_variables() -> catalogue_client::Result<()> {
//!     let settings = CatalogueSettings::default().with_env_overrides();
//!     let fetcher = CatalogueFetcher::from_settings(&settings, HttpTransport::new(&settings)?);
//!     let mut ctx = CatalogueContext::new(Selection::new().with_keywords(["diabetes"]));
//!
//!     let page = fetcher.fetch_variables(&mut ctx).await?;
//!     println!("{} of {} variables", page.variables.len(), page.count);
//!
//!     let detail = fetcher.fetch_variable_detail(&mut ctx, "bmi").await?;
//!     println!("{:?}", detail.label);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Core modules
pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod query;
pub mod selection;

// Execution
pub mod fetch;
pub mod transport;

pub use cache::{CacheMutation, CatalogueCache, DetailEntry};
pub use config::CatalogueSettings;
pub use context::CatalogueContext;
pub use error::{CatalogueError, Result};
pub use fetch::{CatalogueFetcher, VariablePage};
pub use filter::{
    MappingsFilter, MappingsVariables, VariablesFilter, mappings_variables, variable_detail_filter,
    variables_filter,
};
pub use query::{Operation, QueryDocument};
pub use selection::Selection;
pub use transport::{HttpTransport, Transport};

/// Current version of the client.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
