// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Function node emitter.
//!
//! Injects `parameters.functionCode` verbatim, line by line. This is the one
//! emitter that passes caller-authored code through unmodified: no escaping,
//! no sandboxing. The program assembler re-indents each line by one level.

use serde_json::Value;

use super::{Emission, NodeEmitter};
use flowgen_dsl::Node;

/// Emitter for `function` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionEmitter;

impl NodeEmitter for FunctionEmitter {
    fn emit(&self, node: &Node) -> Emission {
        let mut emission = Emission::empty();

        if let Some(code) = node
            .parameters
            .get("functionCode")
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
        {
            for line in code.split('\n') {
                emission.push(line.to_string());
            }
        }

        emission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_is_split_verbatim() {
        let node = Node::new("Fn", "n8n-nodes-base.function").with_parameter(
            "functionCode",
            json!("const items = $input.all();\n\nreturn items.map(i => `${i}`);"),
        );
        let emission = FunctionEmitter.emit(&node);

        assert_eq!(
            emission.lines,
            vec![
                "const items = $input.all();".to_string(),
                "".to_string(),
                "return items.map(i => `${i}`);".to_string(),
            ]
        );
        assert!(emission.bindings.is_empty());
    }

    #[test]
    fn test_missing_or_empty_code_emits_nothing() {
        assert!(FunctionEmitter.emit(&Node::new("Fn", "function")).lines.is_empty());

        let empty = Node::new("Fn", "function").with_parameter("functionCode", json!(""));
        assert!(FunctionEmitter.emit(&empty).lines.is_empty());

        let wrong_type = Node::new("Fn", "function").with_parameter("functionCode", json!(7));
        assert!(FunctionEmitter.emit(&wrong_type).lines.is_empty());
    }
}
