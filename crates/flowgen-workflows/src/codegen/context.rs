// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Emission context for code generation.
//!
//! Tracks the identifiers bound so far and provides the identifier and
//! indentation utilities every emitter shares.

use std::collections::HashMap;
use tracing::debug;

/// One indentation level inside the generated entry function.
pub const INDENT: &str = "  ";

/// Context for code emission, tracking bound identifiers.
#[derive(Debug, Default)]
pub struct EmitContext {
    /// Maps identifier to the name of the node that first bound it
    bindings: HashMap<String, String>,

    /// Identifiers bound more than once, in emission order
    redeclared: Vec<String>,
}

impl EmitContext {
    /// Create a new emission context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize a string to be used as a JavaScript identifier.
    ///
    /// Replaces every character outside `[A-Za-z0-9_]` with `_`. Nothing
    /// else is changed: no prefixing, no collision avoidance, so the same
    /// name always yields the same identifier wherever it appears.
    pub fn sanitize_ident(s: &str) -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Prefix a line with one indentation level.
    pub fn indent(line: &str) -> String {
        format!("{}{}", INDENT, line)
    }

    /// Record that `node_name` binds `ident`.
    ///
    /// Returns `false` when the identifier was already bound; the generated
    /// code is left as-is and will redeclare it.
    pub fn declare(&mut self, ident: &str, node_name: &str) -> bool {
        if let Some(owner) = self.bindings.get(ident) {
            debug!(
                identifier = %ident,
                first = %owner,
                node = %node_name,
                "Identifier bound more than once"
            );
            self.redeclared.push(ident.to_string());
            return false;
        }
        self.bindings
            .insert(ident.to_string(), node_name.to_string());
        true
    }

    /// Identifiers bound more than once.
    pub fn redeclared(&self) -> &[String] {
        &self.redeclared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_ident() {
        assert_eq!(EmitContext::sanitize_ident("hello"), "hello");
        assert_eq!(EmitContext::sanitize_ident("a!"), "a_");
        assert_eq!(EmitContext::sanitize_ident("HTTP Request"), "HTTP_Request");
        assert_eq!(EmitContext::sanitize_ident("step-1.test"), "step_1_test");
        assert_eq!(EmitContext::sanitize_ident("123abc"), "123abc");
        assert_eq!(EmitContext::sanitize_ident("café"), "caf_");
        assert_eq!(EmitContext::sanitize_ident(""), "");
    }

    #[test]
    fn test_indent() {
        assert_eq!(EmitContext::indent("x;"), "  x;");
        assert_eq!(EmitContext::indent(""), "  ");
    }

    #[test]
    fn test_declare_tracks_redeclaration() {
        let mut ctx = EmitContext::new();
        assert!(ctx.declare("a_b", "a b"));
        assert!(!ctx.declare("a_b", "a-b"));
        assert_eq!(ctx.redeclared(), &["a_b".to_string()]);
    }
}
