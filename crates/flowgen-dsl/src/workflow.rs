// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Workflow document types.
//!
//! These mirror the document shape returned by the workflow store
//! (`GET /api/v1/workflows/{id}`). Deserialization is deliberately lenient:
//! only `nodes` is required, everything else falls back to a default, and
//! fields the transpiler does not read are ignored.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::node_kind::NodeKind;

// ============================================================================
// Root Types
// ============================================================================

/// A complete workflow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Store-assigned identifier (older stores return a number)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_id"
    )]
    pub id: Option<String>,

    /// Human-readable workflow name
    #[serde(default, deserialize_with = "deserialize_string_or_default")]
    pub name: String,

    /// Whether the workflow is activated in the store
    #[serde(default, deserialize_with = "deserialize_bool_or_default")]
    pub active: bool,

    /// Nodes in stored order. Code is emitted in exactly this order.
    pub nodes: Vec<Node>,

    /// Output-to-input wiring between nodes, keyed by source node name
    #[serde(default)]
    pub connections: ConnectionGraph,

    /// Opaque workflow settings (timezone, error workflow, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// One step of the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Store-assigned node identifier
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_id"
    )]
    pub id: Option<String>,

    /// Unique (per workflow) node name; the only handle used by connections
    pub name: String,

    /// Dotted type identifier, e.g. `n8n-nodes-base.httpRequest`
    #[serde(rename = "type")]
    pub node_type: String,

    /// Version of the node type
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_number_or_none"
    )]
    pub type_version: Option<f64>,

    /// Free-form node parameters; anything but an object reads as empty
    #[serde(default, deserialize_with = "deserialize_map_or_empty")]
    pub parameters: Map<String, Value>,

    /// Canvas position `[x, y]`
    #[serde(default, deserialize_with = "deserialize_position_or_origin")]
    pub position: [f64; 2],

    /// Whether the node is disabled in the editor
    #[serde(default, deserialize_with = "deserialize_bool_or_default")]
    pub disabled: bool,
}

// ============================================================================
// Connections
// ============================================================================

/// Source node name → output port name → output slots → targets.
pub type ConnectionGraph = BTreeMap<String, BTreeMap<String, Vec<Vec<ConnectionTarget>>>>;

/// One end of a connection: which node input receives the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionTarget {
    /// Target node name
    pub node: String,

    /// Input port name (usually `main`)
    #[serde(rename = "type", default = "default_port")]
    pub port: String,

    /// Input slot index
    #[serde(default)]
    pub index: usize,
}

fn default_port() -> String {
    "main".to_string()
}

// ============================================================================
// Lenient Field Deserializers
// ============================================================================

// Malformed values read as the field default instead of failing the document.

fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn deserialize_bool_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or_default())
}

fn deserialize_number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn deserialize_map_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

fn deserialize_position_or_origin<'de, D>(deserializer: D) -> Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let coords = value
        .as_array()
        .and_then(|a| Some([a.first()?.as_f64()?, a.get(1)?.as_f64()?]));
    Ok(coords.unwrap_or([0.0, 0.0]))
}

impl Node {
    /// Create a node with empty parameters.
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            node_type: node_type.into(),
            type_version: None,
            parameters: Map::new(),
            position: [0.0, 0.0],
            disabled: false,
        }
    }

    /// Builder-style parameter setter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// The recognised emitter family for this node, if any.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_type(&self.node_type)
    }

    /// A parameter as a non-empty string.
    pub fn string_parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

impl Workflow {
    /// Create an empty workflow with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            active: false,
            nodes: Vec::new(),
            connections: ConnectionGraph::new(),
            settings: None,
        }
    }

    /// Builder-style node append.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Builder-style connection on the `main` port, output slot 0.
    pub fn with_connection(mut self, from: &str, to: &str) -> Self {
        let slots = self
            .connections
            .entry(from.to_string())
            .or_default()
            .entry(default_port())
            .or_default();
        if slots.is_empty() {
            slots.push(Vec::new());
        }
        slots[0].push(ConnectionTarget {
            node: to.to_string(),
            port: default_port(),
            index: 0,
        });
        self
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Position of a node in the stored node sequence.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }

    /// Names of the nodes fed by `name`, in port/slot order.
    pub fn downstream(&self, name: &str) -> Vec<&str> {
        self.connections
            .get(name)
            .into_iter()
            .flat_map(|ports| ports.values())
            .flatten()
            .flatten()
            .map(|target| target.node.as_str())
            .collect()
    }

    /// Every `(source, target)` edge in deterministic order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &ConnectionTarget)> {
        self.connections.iter().flat_map(|(from, ports)| {
            ports
                .values()
                .flatten()
                .flatten()
                .map(move |target| (from.as_str(), target))
        })
    }
}
