// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Flowgen Management SDK
//!
//! Client for the workflow store's REST API. The transpiler only reads from
//! the store: it fetches the workflow document it is asked to convert and can
//! list workflows to find one.
//!
//! # Example
//!
//! ```no_run
//! use flowgen_management_sdk::{SdkConfig, WorkflowStoreClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WorkflowStoreClient::new(
//!     SdkConfig::new()
//!         .with_base_url("http://localhost:5678")
//!         .with_api_key("my-api-key"),
//! )?;
//!
//! let workflow = client.fetch_workflow("42").await?;
//! println!("{} has {} nodes", workflow.name, workflow.nodes.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::WorkflowStoreClient;
pub use config::{API_KEY_HEADER, DEFAULT_STORE_URL, SdkConfig};
pub use error::{Result, SdkError};
pub use types::{ListWorkflowsOptions, ListWorkflowsResult, WorkflowSummary};
