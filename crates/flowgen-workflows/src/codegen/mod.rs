// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Code generation for workflow translation.
//!
//! Lowers a workflow's node list into one JavaScript ES module. Nodes are
//! emitted strictly in stored order; the connection graph is not consulted.

pub mod context;
pub mod nodes;
pub mod program;

use flowgen_dsl::Workflow;

use context::EmitContext;
use nodes::EmitterRegistry;

/// Generate JavaScript source for a workflow using the built-in emitters.
///
/// Pure and deterministic: the same workflow always yields byte-identical
/// output.
pub fn compile(workflow: &Workflow) -> String {
    compile_with_registry(workflow, &EmitterRegistry::with_defaults())
}

/// Generate JavaScript source using a custom emitter registry.
pub fn compile_with_registry(workflow: &Workflow, registry: &EmitterRegistry) -> String {
    let mut ctx = EmitContext::new();
    program::emit_program(workflow, registry, &mut ctx)
}
