// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Workflow document parsing tests.

use flowgen_dsl::{NodeKind, Node, Workflow, parse_workflow, parse_workflow_str, workflow_json_schema};
use serde_json::json;

fn store_document() -> serde_json::Value {
    json!({
        "id": "wf-42",
        "name": "Order sync",
        "active": true,
        "versionId": "ignored",
        "tags": [],
        "nodes": [
            {
                "id": "a1",
                "name": "Fetch Orders",
                "type": "n8n-nodes-base.httpRequest",
                "typeVersion": 4.2,
                "position": [250, 300],
                "parameters": { "url": "https://shop/orders", "method": "GET" }
            },
            {
                "name": "Tag",
                "type": "n8n-nodes-base.set",
                "position": [450, 300],
                "parameters": { "values": [{ "name": "tag", "value": "sync" }] },
                "disabled": true
            }
        ],
        "connections": {
            "Fetch Orders": {
                "main": [[{ "node": "Tag", "type": "main", "index": 0 }]]
            }
        }
    })
}

#[test]
fn test_parse_store_document() {
    let workflow = parse_workflow(&store_document()).unwrap();

    assert_eq!(workflow.id.as_deref(), Some("wf-42"));
    assert_eq!(workflow.name, "Order sync");
    assert!(workflow.active);
    assert_eq!(workflow.nodes.len(), 2);

    let fetch = &workflow.nodes[0];
    assert_eq!(fetch.node_type, "n8n-nodes-base.httpRequest");
    assert_eq!(fetch.type_version, Some(4.2));
    assert_eq!(fetch.position, [250.0, 300.0]);
    assert_eq!(fetch.kind(), Some(NodeKind::HttpRequest));
    assert!(!fetch.disabled);
    assert!(workflow.nodes[1].disabled);
}

#[test]
fn test_minimal_document_defaults() {
    let workflow = parse_workflow_str(r#"{"nodes": [{"name": "A", "type": "x"}]}"#).unwrap();

    assert_eq!(workflow.id, None);
    assert_eq!(workflow.name, "");
    assert!(!workflow.active);
    assert!(workflow.connections.is_empty());
    assert!(workflow.nodes[0].parameters.is_empty());
    assert_eq!(workflow.nodes[0].position, [0.0, 0.0]);
}

#[test]
fn test_malformed_node_fields_degrade_to_defaults() {
    let workflow = parse_workflow(&json!({
        "nodes": [
            {
                "name": "Null params",
                "type": "n8n-nodes-base.httpRequest",
                "parameters": null,
                "position": null,
                "disabled": null,
                "typeVersion": "4"
            },
            {
                "name": "Array params",
                "type": "n8n-nodes-base.set",
                "parameters": [],
                "position": ["a", 3],
                "disabled": "yes"
            },
            {
                "name": "Short position",
                "type": "n8n-nodes-base.function",
                "parameters": "oops",
                "position": [10]
            }
        ]
    }))
    .unwrap();

    for node in &workflow.nodes {
        assert!(node.parameters.is_empty(), "{}", node.name);
        assert_eq!(node.position, [0.0, 0.0], "{}", node.name);
        assert!(!node.disabled, "{}", node.name);
        assert_eq!(node.type_version, None, "{}", node.name);
    }
}

#[test]
fn test_null_parameters_from_text() {
    let workflow = parse_workflow_str(
        r#"{"nodes":[{"name":"A","type":"n8n-nodes-base.httpRequest","parameters":null}]}"#,
    )
    .unwrap();
    assert!(workflow.nodes[0].parameters.is_empty());
}

#[test]
fn test_numeric_ids_are_accepted() {
    let workflow = parse_workflow(&json!({
        "id": 7,
        "name": null,
        "active": 1,
        "nodes": [{ "id": 12, "name": "A", "type": "set" }]
    }))
    .unwrap();

    assert_eq!(workflow.id.as_deref(), Some("7"));
    assert_eq!(workflow.name, "");
    assert!(!workflow.active);
    assert_eq!(workflow.nodes[0].id.as_deref(), Some("12"));

    let unusable = parse_workflow(&json!({ "id": { "x": 1 }, "nodes": [] })).unwrap();
    assert_eq!(unusable.id, None);
}

#[test]
fn test_missing_nodes_is_an_error() {
    let err = parse_workflow(&json!({"name": "no nodes"})).unwrap_err();
    assert!(err.contains("Failed to parse workflow"));
    assert!(err.contains("nodes"));
}

#[test]
fn test_downstream_and_edges() {
    let workflow = parse_workflow(&store_document()).unwrap();

    assert_eq!(workflow.downstream("Fetch Orders"), vec!["Tag"]);
    assert!(workflow.downstream("Tag").is_empty());

    let edges: Vec<_> = workflow
        .edges()
        .map(|(from, target)| (from.to_string(), target.node.clone()))
        .collect();
    assert_eq!(edges, vec![("Fetch Orders".to_string(), "Tag".to_string())]);
}

#[test]
fn test_connection_target_defaults() {
    let workflow = parse_workflow(&json!({
        "nodes": [],
        "connections": { "A": { "main": [[{ "node": "B" }]] } }
    }))
    .unwrap();

    let (_, target) = workflow.edges().next().unwrap();
    assert_eq!(target.port, "main");
    assert_eq!(target.index, 0);
}

#[test]
fn test_builders() {
    let workflow = Workflow::new("built")
        .with_node(Node::new("A", "set"))
        .with_node(Node::new("B", "function").with_parameter("functionCode", json!("return 1;")))
        .with_connection("A", "B")
        .with_connection("A", "C");

    assert_eq!(workflow.node_index("B"), Some(1));
    assert_eq!(workflow.node("B").unwrap().string_parameter("functionCode"), Some("return 1;"));
    assert_eq!(workflow.downstream("A"), vec!["B", "C"]);
}

#[test]
fn test_serialization_uses_store_field_names() {
    let node = Node::new("A", "n8n-nodes-base.set");
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(value["type"], "n8n-nodes-base.set");
    assert!(value.get("nodeType").is_none());
    assert!(value.get("typeVersion").is_none());
}

#[test]
fn test_schema_describes_nodes() {
    let schema = serde_json::to_value(workflow_json_schema()).unwrap();
    let required = schema["required"].as_array().unwrap();
    assert!(required.iter().any(|v| v == "nodes"));
    assert!(schema["definitions"]["Node"].is_object());
}
