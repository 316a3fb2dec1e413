// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fallback for node types without an emitter.

use tracing::debug;

use super::Emission;
use flowgen_dsl::Node;

/// Emit a single comment naming the unhandled type.
pub fn emit(node: &Node) -> Emission {
    debug!(node = %node.name, node_type = %node.node_type, "No emitter for node type");

    let mut emission = Emission::empty();
    emission.push(format!("// unhandled node type: {}", node.node_type));
    emission
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_comment_line() {
        let emission = emit(&Node::new("Wait", "n8n-nodes-base.wait"));
        assert_eq!(
            emission.lines,
            vec!["// unhandled node type: n8n-nodes-base.wait".to_string()]
        );
        assert!(emission.bindings.is_empty());
    }
}
