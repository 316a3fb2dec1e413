// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Program assembly.
//!
//! Wraps the per-node emissions into a single ES module with one async entry
//! function, in the stored node order.

use flowgen_dsl::Workflow;
use tracing::debug;

use super::context::EmitContext;
use super::nodes::EmitterRegistry;

/// First line of every generated program.
pub const BANNER: &str = "// Auto-generated code from n8n workflow";

/// HTTP client import used by `httpRequest` statements.
pub const IMPORT: &str = "import axios from 'axios';";

/// Emit the complete program source.
pub fn emit_program(workflow: &Workflow, registry: &EmitterRegistry, ctx: &mut EmitContext) -> String {
    let mut lines: Vec<String> = vec![
        BANNER.to_string(),
        IMPORT.to_string(),
        String::new(),
        "async function main() {".to_string(),
    ];

    for node in &workflow.nodes {
        lines.push(EmitContext::indent(&format!(
            "// {} ({})",
            node.name, node.node_type
        )));

        let emission = registry.emit(node);
        for ident in &emission.bindings {
            ctx.declare(ident, &node.name);
        }
        lines.extend(emission.lines.iter().map(|line| EmitContext::indent(line)));
        lines.push(String::new());
    }

    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("main().catch(console.error);".to_string());

    debug!(
        workflow = %workflow.name,
        nodes = workflow.nodes.len(),
        redeclared = ctx.redeclared().len(),
        "Emitted program"
    );

    lines.join("\n")
}
