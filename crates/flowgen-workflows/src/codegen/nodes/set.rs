// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Set node emitter.
//!
//! Emits one constant per entry of `parameters.values`, with the entry value
//! serialized as a JSON literal.

use serde_json::Value;
use tracing::debug;

use super::{Emission, NodeEmitter};
use crate::codegen::context::EmitContext;
use flowgen_dsl::Node;

/// Emitter for `set` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetEmitter;

impl NodeEmitter for SetEmitter {
    fn emit(&self, node: &Node) -> Emission {
        let mut emission = Emission::empty();

        let Some(values) = node.parameters.get("values").and_then(Value::as_array) else {
            return emission;
        };

        for entry in values {
            let Some(name) = entry.get("name").and_then(Value::as_str) else {
                debug!(node = %node.name, "Skipping set entry without a name");
                continue;
            };
            let ident = EmitContext::sanitize_ident(name);
            let line = format!("const {} = {};", ident, value_literal(entry.get("value")));
            emission.bind(ident, line);
        }

        emission
    }
}

/// JSON literal for an entry value; a missing value is `undefined`.
pub fn value_literal(value: Option<&Value>) -> String {
    match value {
        Some(v) => serde_json::to_string(v).unwrap_or_else(|_| "undefined".to_string()),
        None => "undefined".to_string(),
    }
}
