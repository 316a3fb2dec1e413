// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for flowgen-ai.

use thiserror::Error;

/// Result type using AiError.
pub type Result<T> = std::result::Result<T, AiError>;

/// Errors raised by an AI rewrite.
#[derive(Debug, Clone, Error)]
pub enum AiError {
    /// No credential (or an invalid setting) for the language-model service.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The service answered with a non-success status.
    #[error("upstream error [{status}]: {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response did not carry a completion.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AiError::InvalidResponse(err.to_string())
        } else {
            AiError::Transport(err.to_string())
        }
    }
}
