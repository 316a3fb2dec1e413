// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTTP request node emitter.
//!
//! Lowers an `httpRequest` node to a single awaited axios call bound to the
//! sanitized node name. The URL goes into a template literal untouched, so
//! `${...}` expressions in it survive into the generated code.

use serde_json::Value;

use super::{Emission, NodeEmitter};
use crate::codegen::context::EmitContext;
use flowgen_dsl::Node;

/// Method used when the node specifies none.
pub const DEFAULT_METHOD: &str = "GET";

/// Emitter for `httpRequest` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRequestEmitter;

impl NodeEmitter for HttpRequestEmitter {
    fn emit(&self, node: &Node) -> Emission {
        let ident = EmitContext::sanitize_ident(&node.name);
        let line = format!(
            "const {} = await axios({{ method: '{}', url: `{}` }});",
            ident,
            resolve_method(node),
            resolve_url(node)
        );

        let mut emission = Emission::empty();
        emission.bind(ident, line);
        emission
    }
}

/// `httpMethod`, else `method`, else `GET`.
pub fn resolve_method(node: &Node) -> &str {
    node.string_parameter("httpMethod")
        .or_else(|| node.string_parameter("method"))
        .unwrap_or(DEFAULT_METHOD)
}

/// `url` when it is a string, else empty.
pub fn resolve_url(node: &Node) -> &str {
    node.parameters
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn emit_one(node: &Node) -> String {
        let emission = HttpRequestEmitter.emit(node);
        assert_eq!(emission.lines.len(), 1);
        emission.lines[0].clone()
    }

    #[test]
    fn test_method_and_url() {
        let node = Node::new("Call API", "n8n-nodes-base.httpRequest")
            .with_parameter("method", json!("POST"))
            .with_parameter("url", json!("https://x/y"));

        assert_eq!(
            emit_one(&node),
            "const Call_API = await axios({ method: 'POST', url: `https://x/y` });"
        );
    }

    #[test]
    fn test_http_method_takes_precedence() {
        let node = Node::new("A", "httpRequest")
            .with_parameter("httpMethod", json!("PUT"))
            .with_parameter("method", json!("POST"));
        assert_eq!(resolve_method(&node), "PUT");
    }

    #[test]
    fn test_defaults() {
        let node = Node::new("A", "httpRequest");
        assert_eq!(
            emit_one(&node),
            "const A = await axios({ method: 'GET', url: `` });"
        );
    }

    #[test]
    fn test_malformed_parameters_degrade() {
        let node = Node::new("A", "httpRequest")
            .with_parameter("httpMethod", json!(""))
            .with_parameter("method", json!(42))
            .with_parameter("url", json!({"not": "a string"}));
        assert_eq!(resolve_method(&node), "GET");
        assert_eq!(resolve_url(&node), "");
    }

    #[test]
    fn test_url_expressions_pass_through() {
        let node = Node::new("A", "httpRequest")
            .with_parameter("url", json!("https://api/${$json.id}/items"));
        assert!(emit_one(&node).contains("url: `https://api/${$json.id}/items`"));
    }

    #[test]
    fn test_binding_is_sanitized_name() {
        let emission = HttpRequestEmitter.emit(&Node::new("Get #1", "httpRequest"));
        assert_eq!(emission.bindings, vec!["Get__1".to_string()]);
    }
}
