// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for the AI rewrite adapter.

/// Default chat model when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for [`OpenAiRewriter`](crate::OpenAiRewriter).
#[derive(Clone)]
pub struct AiConfig {
    /// Bearer credential. `None` means AI assistance is unavailable.
    pub api_key: Option<String>,
    /// Chat model name.
    pub model: String,
    /// API base URL, without the `/chat/completions` suffix.
    pub base_url: String,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AiConfig {
    /// Configuration with no credential and default model/endpoint.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `OPENAI_API_KEY`: Credential (unset or empty disables AI assistance)
    /// - `OPENAI_MODEL`: Model name (default: "gpt-3.5-turbo")
    /// - `OPENAI_BASE_URL`: API base (default: "https://api.openai.com/v1")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty("OPENAI_API_KEY"),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Set the credential.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Whether a credential is present.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the chat-completion endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
