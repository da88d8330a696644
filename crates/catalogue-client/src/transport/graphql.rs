//! GraphQL-over-HTTP request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CatalogueError, Result};
use crate::query::QueryDocument;

/// Body of a GraphQL POST request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Value>,
}

impl<'a> GraphQlRequest<'a> {
    pub fn new(document: &'a QueryDocument, variables: Option<&'a Value>) -> Self {
        Self {
            query: document.text,
            operation_name: document.operation.name(),
            variables,
        }
    }
}

/// One entry of the response's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Body of a GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Extracts `data`, turning reported errors into [`CatalogueError::GraphQl`].
    ///
    /// Errors take precedence over partial data.
    pub fn into_data(self) -> Result<Value> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(CatalogueError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        match self.data {
            Some(Value::Null) | None => Err(CatalogueError::MissingData),
            Some(data) => Ok(data),
        }
    }
}
