// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request and response types for workflow store operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for listing workflows.
#[derive(Debug, Clone, Default)]
pub struct ListWorkflowsOptions {
    /// Only active (or only inactive) workflows
    pub active: Option<bool>,
    /// Filter by workflow name
    pub name: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Cursor returned by a previous page
    pub cursor: Option<String>,
}

impl ListWorkflowsOptions {
    /// Create options with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by activation state.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Filter by name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a previous page.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Query-string pairs for the list request.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }
}

/// Workflow listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    /// Workflow identifier
    pub id: String,
    /// Workflow name
    #[serde(default)]
    pub name: String,
    /// Activation state
    #[serde(default)]
    pub active: bool,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of workflows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkflowsResult {
    /// Workflows on this page
    #[serde(default)]
    pub data: Vec<WorkflowSummary>,
    /// Cursor for the next page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs() {
        let options = ListWorkflowsOptions::new()
            .with_active(true)
            .with_name("sync")
            .with_limit(10)
            .with_cursor("abc");

        assert_eq!(
            options.query_pairs(),
            vec![
                ("active", "true".to_string()),
                ("name", "sync".to_string()),
                ("limit", "10".to_string()),
                ("cursor", "abc".to_string()),
            ]
        );
        assert!(ListWorkflowsOptions::new().query_pairs().is_empty());
    }

    #[test]
    fn test_list_result_parses_store_page() {
        let page: ListWorkflowsResult = serde_json::from_value(json!({
            "data": [{
                "id": "1",
                "name": "A",
                "active": false,
                "createdAt": "2024-05-01T10:00:00.000Z",
                "updatedAt": "2024-05-02T10:00:00.000Z",
                "nodes": []
            }],
            "nextCursor": null
        }))
        .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "1");
        assert!(page.data[0].created_at.is_some());
        assert!(page.next_cursor.is_none());
    }
}
