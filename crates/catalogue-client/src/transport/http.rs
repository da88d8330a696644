//! GraphQL transport over HTTP.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use super::Transport;
use super::graphql::{GraphQlRequest, GraphQlResponse};
use crate::config::CatalogueSettings;
use crate::error::{CatalogueError, Result};
use crate::query::QueryDocument;

/// User agent string for catalogue requests.
const USER_AGENT_VALUE: &str = concat!("catalogue-client/", env!("CARGO_PKG_VERSION"));

/// Longest response body kept in an HTTP error.
const ERROR_BODY_LIMIT: usize = 500;

/// Sends query documents to a catalogue's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for the endpoint named in `settings`.
    pub fn new(settings: &CatalogueSettings) -> Result<Self> {
        settings.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            CatalogueError::Transport(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Checks the status and unwraps the GraphQL envelope.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogueError::Http {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let bytes = response.bytes().await?;
        let envelope: GraphQlResponse = serde_json::from_slice(&bytes)?;
        envelope.into_data()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, document: &QueryDocument, variables: Option<Value>) -> Result<Value> {
        let request = GraphQlRequest::new(document, variables.as_ref());

        tracing::debug!(
            operation = document.operation.name(),
            endpoint = %self.endpoint,
            "Sending GraphQL request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
