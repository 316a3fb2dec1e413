// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for the workflow store client.

use std::time::Duration;

use crate::error::{Result, SdkError};

/// Default store URL when `N8N_URL` is not set.
pub const DEFAULT_STORE_URL: &str = "http://localhost:5678";

/// Header carrying the store API key (`X-N8N-API-KEY`).
pub const API_KEY_HEADER: &str = "x-n8n-api-key";

/// Configuration for the [`WorkflowStoreClient`](crate::WorkflowStoreClient).
#[derive(Clone)]
pub struct SdkConfig {
    /// Store base URL (the `/api/v1` prefix is appended by the client).
    pub base_url: String,
    /// API key sent in [`API_KEY_HEADER`]; omitted when `None`.
    pub api_key: Option<String>,
    /// Transport timeout per request. `None` leaves latency unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            api_key: None,
            request_timeout: None,
        }
    }
}

impl std::fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl SdkConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `N8N_URL`: Store base URL (default: "http://localhost:5678")
    /// - `N8N_API_KEY`: API key (default: none)
    /// - `FLOWGEN_REQUEST_TIMEOUT_MS`: Request timeout in milliseconds (default: none)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("N8N_URL").unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SdkError::Config(format!(
                "invalid N8N_URL: {} (expected http:// or https://)",
                base_url
            )));
        }

        let api_key = lookup("N8N_API_KEY").filter(|k| !k.is_empty());

        let request_timeout = lookup("FLOWGEN_REQUEST_TIMEOUT_MS")
            .map(|v| {
                v.parse::<u64>().map_err(|e| {
                    SdkError::Config(format!("invalid FLOWGEN_REQUEST_TIMEOUT_MS: {}", e))
                })
            })
            .transpose()?
            .map(Duration::from_millis);

        Ok(Self {
            base_url,
            api_key,
            request_timeout,
        })
    }

    /// Set the store base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Versioned API root, e.g. `http://localhost:5678/api/v1`.
    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.base_url.trim_end_matches('/'))
    }
}
