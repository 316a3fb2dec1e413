// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Node emitters for code generation.
//!
//! Each recognised node type has its own emitter that lowers one node into
//! statements for the body of the generated entry function. Emitters produce
//! lines relative to the function body; the program assembler adds the
//! indentation.

pub mod function;
pub mod http_request;
pub mod set;
pub mod unhandled;

use std::collections::HashMap;

use flowgen_dsl::{Node, NodeKind, type_key};

/// Output of emitting one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emission {
    /// Statement lines, unindented
    pub lines: Vec<String>,
    /// Identifiers bound by these statements
    pub bindings: Vec<String>,
}

impl Emission {
    /// An emission with no lines.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a statement that binds `ident`.
    pub fn bind(&mut self, ident: String, line: String) {
        self.bindings.push(ident);
        self.lines.push(line);
    }

    /// Append a line that binds nothing.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

/// Trait for emitting the statements of one node.
///
/// Emitters are pure: the same node always yields the same emission, and a
/// malformed node degrades to defaults instead of failing.
pub trait NodeEmitter: Send + Sync {
    /// Emit the statements for this node.
    fn emit(&self, node: &Node) -> Emission;
}

/// Mapping from node type identifier to emitter.
pub struct EmitterRegistry {
    emitters: HashMap<String, Box<dyn NodeEmitter>>,
}

impl std::fmt::Debug for EmitterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.emitters.keys().collect();
        keys.sort();
        f.debug_struct("EmitterRegistry").field("types", &keys).finish()
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl EmitterRegistry {
    /// A registry with no emitters; every node is unhandled.
    pub fn empty() -> Self {
        Self {
            emitters: HashMap::new(),
        }
    }

    /// A registry with the built-in `httpRequest`, `set` and `function` emitters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(
            NodeKind::HttpRequest.key(),
            http_request::HttpRequestEmitter,
        );
        registry.register(NodeKind::Set.key(), set::SetEmitter);
        registry.register(NodeKind::Function.key(), function::FunctionEmitter);
        registry
    }

    /// Install (or replace) the emitter for a type key.
    ///
    /// Keys may be full dotted types (`n8n-nodes-base.code`) or bare type
    /// names (`code`).
    pub fn register(&mut self, key: impl Into<String>, emitter: impl NodeEmitter + 'static) {
        self.emitters.insert(key.into(), Box::new(emitter));
    }

    /// Find the emitter for a node type: exact key first, then the last
    /// dotted segment.
    pub fn resolve(&self, node_type: &str) -> Option<&dyn NodeEmitter> {
        self.emitters
            .get(node_type)
            .or_else(|| self.emitters.get(type_key(node_type)))
            .map(|emitter| &**emitter)
    }

    /// Whether a node type has a registered emitter.
    pub fn handles(&self, node_type: &str) -> bool {
        self.resolve(node_type).is_some()
    }

    /// Emit a node, falling back to the unhandled-type comment.
    pub fn emit(&self, node: &Node) -> Emission {
        match self.resolve(&node.node_type) {
            Some(emitter) => emitter.emit(node),
            None => unhandled::emit(node),
        }
    }
}
