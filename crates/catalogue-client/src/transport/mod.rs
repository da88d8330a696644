//! Execution of query documents against a GraphQL endpoint.
//!
//! [`Transport`] is the only contract the fetch layer needs; [`HttpTransport`]
//! implements it over HTTP.

pub mod graphql;
pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::query::QueryDocument;

pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use http::HttpTransport;

/// Executes a query document and returns the GraphQL `data` object.
///
/// `variables` is `None` for operations that take no arguments. Transports do
/// not retry, cache or reorder requests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, document: &QueryDocument, variables: Option<Value>) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, document: &QueryDocument, variables: Option<Value>) -> Result<Value> {
        (**self).execute(document, variables).await
    }
}
