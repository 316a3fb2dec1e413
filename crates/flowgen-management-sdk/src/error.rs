// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for flowgen-management-sdk.

use thiserror::Error;

/// Result type using SdkError.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur when talking to the workflow store.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The request did not reach the store or the response was cut off.
    #[error("connection error: {0}")]
    Connection(String),

    /// The store answered with a non-success status.
    #[error("server error [{status}]: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        SdkError::Connection(err.to_string())
    }
}

impl SdkError {
    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
