// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Advisory workflow checks.
//!
//! Code generation never rejects a workflow. This module reports the
//! conditions under which the generated program is likely to be wrong:
//! - node names that collide, before or after identifier sanitization
//! - connections that reference unknown nodes
//! - connections whose target precedes the source in list order
//! - node types that have no emitter

use std::collections::{BTreeMap, HashMap, HashSet};

use flowgen_dsl::Workflow;

use crate::codegen::context::EmitContext;
use crate::codegen::nodes::EmitterRegistry;

// ============================================================================
// Validation Result Types
// ============================================================================

/// Result of workflow validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Warnings in discovery order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ============================================================================
// Validation Warnings
// ============================================================================

/// Conditions that do not block generation but indicate a likely defect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ValidationWarning {
    /// The workflow has no nodes.
    EmptyWorkflow,
    /// Two or more nodes share a name.
    DuplicateNodeName { name: String },
    /// Distinct node names sanitize to the same identifier.
    IdentifierCollision {
        identifier: String,
        nodes: Vec<String>,
    },
    /// A connection originates from a node that does not exist.
    UnknownConnectionSource {
        node: String,
        available_nodes: Vec<String>,
    },
    /// A connection targets a node that does not exist.
    UnknownConnectionTarget {
        from: String,
        to: String,
        available_nodes: Vec<String>,
    },
    /// A connection's target is emitted before its source.
    OutOfOrderConnection { from: String, to: String },
    /// No emitter handles the node type.
    UnhandledNodeType { node: String, node_type: String },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::EmptyWorkflow => {
                write!(f, "[W001] Workflow has no nodes; generated program is empty")
            }
            ValidationWarning::DuplicateNodeName { name } => {
                write!(f, "[W002] Node name '{}' is used more than once", name)
            }
            ValidationWarning::IdentifierCollision { identifier, nodes } => write!(
                f,
                "[W003] Nodes {} all map to identifier '{}'; generated code redeclares it",
                nodes
                    .iter()
                    .map(|n| format!("'{}'", n))
                    .collect::<Vec<_>>()
                    .join(", "),
                identifier
            ),
            ValidationWarning::UnknownConnectionSource {
                node,
                available_nodes,
            } => {
                let suggestion_text = suggestion(node, available_nodes);
                write!(
                    f,
                    "[W010] Connection source '{}' is not a node in this workflow{}",
                    node, suggestion_text
                )
            }
            ValidationWarning::UnknownConnectionTarget {
                from,
                to,
                available_nodes,
            } => {
                let suggestion_text = suggestion(to, available_nodes);
                write!(
                    f,
                    "[W011] Node '{}' connects to unknown node '{}'{}",
                    from, to, suggestion_text
                )
            }
            ValidationWarning::OutOfOrderConnection { from, to } => write!(
                f,
                "[W020] Node '{}' feeds '{}', which is emitted earlier; code runs in list order",
                from, to
            ),
            ValidationWarning::UnhandledNodeType { node, node_type } => write!(
                f,
                "[W030] Node '{}': type '{}' has no emitter and becomes a comment",
                node, node_type
            ),
        }
    }
}

fn suggestion(name: &str, candidates: &[String]) -> String {
    find_similar_name(name, candidates)
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default()
}

// ============================================================================
// Main Validation Function
// ============================================================================

/// Validate a workflow against the built-in emitters.
pub fn validate_workflow(workflow: &Workflow) -> ValidationResult {
    validate_workflow_with_registry(workflow, &EmitterRegistry::with_defaults())
}

/// Validate a workflow against a custom emitter registry.
pub fn validate_workflow_with_registry(
    workflow: &Workflow,
    registry: &EmitterRegistry,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    if workflow.nodes.is_empty() {
        result.warnings.push(ValidationWarning::EmptyWorkflow);
    }

    validate_names(workflow, &mut result);
    validate_connections(workflow, &mut result);
    validate_node_types(workflow, registry, &mut result);

    result
}

// ============================================================================
// Names
// ============================================================================

fn validate_names(workflow: &Workflow, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for node in &workflow.nodes {
        if !seen.insert(node.name.as_str()) && reported.insert(node.name.as_str()) {
            result.warnings.push(ValidationWarning::DuplicateNodeName {
                name: node.name.clone(),
            });
        }
    }

    // identifier -> distinct node names, in first-seen order
    let mut by_ident: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for node in &workflow.nodes {
        let names = by_ident
            .entry(EmitContext::sanitize_ident(&node.name))
            .or_default();
        if !names.contains(&node.name) {
            names.push(node.name.clone());
        }
    }
    for (identifier, nodes) in by_ident {
        if nodes.len() > 1 {
            result
                .warnings
                .push(ValidationWarning::IdentifierCollision { identifier, nodes });
        }
    }
}

// ============================================================================
// Connections
// ============================================================================

fn validate_connections(workflow: &Workflow, result: &mut ValidationResult) {
    let positions: HashMap<&str, usize> = workflow
        .nodes
        .iter()
        .enumerate()
        .rev()
        .map(|(i, n)| (n.name.as_str(), i))
        .collect();
    let available: Vec<String> = workflow.nodes.iter().map(|n| n.name.clone()).collect();

    for source in workflow.connections.keys() {
        if !positions.contains_key(source.as_str()) {
            result
                .warnings
                .push(ValidationWarning::UnknownConnectionSource {
                    node: source.clone(),
                    available_nodes: available.clone(),
                });
        }
    }

    for (from, target) in workflow.edges() {
        let Some(&from_pos) = positions.get(from) else {
            continue;
        };
        match positions.get(target.node.as_str()) {
            None => result
                .warnings
                .push(ValidationWarning::UnknownConnectionTarget {
                    from: from.to_string(),
                    to: target.node.clone(),
                    available_nodes: available.clone(),
                }),
            Some(&to_pos) if to_pos < from_pos => {
                result.warnings.push(ValidationWarning::OutOfOrderConnection {
                    from: from.to_string(),
                    to: target.node.clone(),
                })
            }
            Some(_) => {}
        }
    }
}

// ============================================================================
// Node Types
// ============================================================================

fn validate_node_types(
    workflow: &Workflow,
    registry: &EmitterRegistry,
    result: &mut ValidationResult,
) {
    for node in &workflow.nodes {
        if !registry.handles(&node.node_type) {
            result.warnings.push(ValidationWarning::UnhandledNodeType {
                node: node.name.clone(),
                node_type: node.node_type.clone(),
            });
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Closest candidate by edit distance, if any is reasonably close.
fn find_similar_name(target: &str, candidates: &[String]) -> Option<String> {
    let target_lower = target.to_lowercase();

    candidates
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein_distance(&target_lower, &candidate.to_lowercase());
            if distance <= target.len() / 2 + 2 {
                Some((candidate.clone(), distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, d)| *d)
        .map(|(name, _)| name)
}

fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min((curr[j - 1] + 1).min(prev[j - 1] + cost));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
