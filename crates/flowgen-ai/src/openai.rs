// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Chat-completion backed rewriter.
//!
//! ## Wire Protocol
//!
//! ```text
//! POST {base_url}/chat/completions
//! Authorization: Bearer {api_key}
//!
//! {
//!   "model": "gpt-3.5-turbo",
//!   "messages": [
//!     { "role": "system", "content": "..." },
//!     { "role": "user", "content": "Refactor according to: {intent}\n\n{code}" }
//!   ],
//!   "temperature": 0
//! }
//! ```
//!
//! The trimmed content of `choices[0].message` becomes the new code. There is
//! no retry and no request timeout beyond what the transport applies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::AiConfig;
use crate::error::{AiError, Result};
use crate::rewriter::CodeRewriter;

/// Instruction sent as the system message of every rewrite request.
pub const SYSTEM_PROMPT: &str = "You are a Node.js expert who refactors code generated from \
     n8n workflows. Respond with the updated code only.";

// ============================================================================
// Wire Types
// ============================================================================

/// Chat-completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name
    pub model: String,
    /// System and user messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature; always the minimum for rewrites
    pub temperature: u8,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`
    pub role: String,
    /// Message text
    #[serde(default)]
    pub content: Option<String>,
}

/// Chat-completion response body (only the fields read here).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
        }
    }
}

impl ChatCompletionRequest {
    /// Build the rewrite request for `code` and `intent`.
    pub fn rewrite(model: &str, code: &str, intent: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::new("system", SYSTEM_PROMPT),
                ChatMessage::new(
                    "user",
                    format!("Refactor according to: {}\n\n{}", intent, code),
                ),
            ],
            temperature: 0,
        }
    }
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice.
    pub fn first_content(&self) -> Result<String> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| AiError::InvalidResponse("response has no choices".to_string()))?;
        let content = choice.message.content.as_deref().ok_or_else(|| {
            AiError::InvalidResponse("first choice has no message content".to_string())
        })?;
        Ok(content.trim().to_string())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Rewriter that calls an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiRewriter {
    http: reqwest::Client,
    config: AiConfig,
}

impl OpenAiRewriter {
    /// Create a rewriter with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a rewriter from environment variables.
    pub fn from_env() -> Self {
        Self::new(AiConfig::from_env())
    }

    /// Get the rewriter configuration.
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Submit `code` and `intent` and return the model's rewritten code.
    ///
    /// # Errors
    ///
    /// - [`AiError::Configuration`] when no credential is configured
    /// - [`AiError::Upstream`] when the service answers with a non-success status
    /// - [`AiError::Transport`] / [`AiError::InvalidResponse`] otherwise
    #[instrument(skip(self, code), fields(model = %self.config.model, code_len = code.len()))]
    pub async fn ai_rewrite(&self, code: &str, intent: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        let request = ChatCompletionRequest::rewrite(&self.config.model, code, intent);

        debug!("Sending rewrite request");

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable response body: {}>", e));
            return Err(AiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion.first_content()?;

        debug!(result_len = content.len(), "Rewrite completed");

        Ok(content)
    }
}

#[async_trait]
impl CodeRewriter for OpenAiRewriter {
    fn is_available(&self) -> bool {
        self.config.has_credential()
    }

    async fn rewrite(&self, code: &str, intent: &str) -> Result<String> {
        self.ai_rewrite(code, intent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest::rewrite("gpt-test", "let a = 1;", "use const");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-test");
        assert_eq!(body["temperature"], 0);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(
            body["messages"][1]["content"],
            "Refactor according to: use const\n\nlet a = 1;"
        );
    }

    #[test]
    fn test_first_content_trims() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "\n  const a = 1;\n" } }]
        }))
        .unwrap();
        assert_eq!(response.first_content().unwrap(), "const a = 1;");
    }

    #[test]
    fn test_first_content_without_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            response.first_content(),
            Err(AiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_first_content_null_message() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .unwrap();
        assert!(matches!(
            response.first_content(),
            Err(AiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_availability_follows_credential() {
        assert!(!OpenAiRewriter::new(AiConfig::new()).is_available());
        assert!(OpenAiRewriter::new(AiConfig::new().with_api_key("sk")).is_available());
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration_error() {
        let rewriter = OpenAiRewriter::new(AiConfig::new());
        let err = rewriter.ai_rewrite("let a;", "simplify").await.unwrap_err();
        assert!(matches!(err, AiError::Configuration(_)));
    }
}
