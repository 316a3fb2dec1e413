// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! WorkflowStoreClient for reading workflows from the store REST API.

use flowgen_dsl::Workflow;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::{API_KEY_HEADER, SdkConfig};
use crate::error::{Result, SdkError};
use crate::types::{ListWorkflowsOptions, ListWorkflowsResult};

/// Read-only client for the workflow store.
///
/// Every operation is a single request/response round trip. Failures are
/// returned to the caller as-is: non-success statuses become
/// [`SdkError::Server`] carrying the raw body, transport failures become
/// [`SdkError::Connection`].
#[derive(Debug, Clone)]
pub struct WorkflowStoreClient {
    http: reqwest::Client,
    config: SdkConfig,
}

impl WorkflowStoreClient {
    /// Create a client with the given configuration.
    pub fn new(config: SdkConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| SdkError::Config(format!("invalid API key: {}", e)))?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SdkError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(SdkConfig::from_env()?)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.api_url(), path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SdkError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Workflows
    // =========================================================================

    /// Fetch one workflow document by identifier.
    #[instrument(skip(self), fields(workflow_id = %workflow_id))]
    pub async fn fetch_workflow(&self, workflow_id: &str) -> Result<Workflow> {
        debug!("Fetching workflow");

        let workflow: Workflow = self
            .get_json(&format!("/workflows/{}", workflow_id), &[])
            .await?;

        debug!(nodes = workflow.nodes.len(), "Fetched workflow");
        Ok(workflow)
    }

    /// List workflows, one page at a time.
    #[instrument(skip(self))]
    pub async fn list_workflows(&self, options: ListWorkflowsOptions) -> Result<ListWorkflowsResult> {
        debug!("Listing workflows");
        self.get_json("/workflows", &options.query_pairs()).await
    }
}
