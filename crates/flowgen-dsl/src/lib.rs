// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Workflow Document Types
//!
//! This crate defines the workflow document model consumed by the flowgen
//! transpiler:
//! - Deserialization of workflow JSON fetched from the workflow store
//! - Type-safe access to nodes, parameters and the connection graph
//! - JSON Schema export via schemars
//!
//! The model is a read-only snapshot. Nothing here talks to the network.

use schemars::schema::RootSchema;

mod node_kind;
mod workflow;

pub use node_kind::{NodeKind, type_key};
pub use workflow::{ConnectionGraph, ConnectionTarget, Node, Workflow};

// ============================================================================
// Parsing Functions
// ============================================================================

/// Parse a workflow from a JSON value.
pub fn parse_workflow(json: &serde_json::Value) -> Result<Workflow, String> {
    serde_json::from_value(json.clone()).map_err(|e| format!("Failed to parse workflow: {}", e))
}

/// Parse a workflow from JSON text.
pub fn parse_workflow_str(json: &str) -> Result<Workflow, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse workflow: {}", e))
}

/// JSON Schema describing the accepted workflow document shape.
pub fn workflow_json_schema() -> RootSchema {
    schemars::schema_for!(Workflow)
}
