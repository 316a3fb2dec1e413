// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Workflow translation pipeline.
//!
//! Generates code for a workflow and, when an intent is supplied, runs the
//! refactor stages over the result.

use flowgen_dsl::Workflow;
use tracing::{debug, info, instrument};

use crate::codegen;
use crate::refactor::{RefactorIntent, Refactorer};
use crate::validation::{ValidationWarning, validate_workflow};

/// Output of [`translate_workflow`].
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// Final JavaScript source
    pub code: String,
    /// Number of nodes emitted
    pub node_count: usize,
    /// Whether the refactor stages ran
    pub refactored: bool,
    /// Advisory warnings for the input workflow
    pub warnings: Vec<ValidationWarning>,
}

/// Translate a workflow to JavaScript, refactoring when `intent` is given.
///
/// An intent with empty text counts as no intent.
#[instrument(skip_all, fields(workflow = %workflow.name, nodes = workflow.nodes.len()))]
pub async fn translate_workflow(
    workflow: &Workflow,
    intent: Option<&RefactorIntent>,
    refactorer: &Refactorer,
) -> TranslationResult {
    let warnings = validate_workflow(workflow).warnings;
    for warning in &warnings {
        debug!(%warning, "Workflow warning");
    }

    let mut code = codegen::compile(workflow);
    let mut refactored = false;

    if let Some(intent) = intent.filter(|i| !i.text.is_empty()) {
        code = refactorer.refactor_with(&code, intent).await;
        refactored = true;
    }

    info!(
        bytes = code.len(),
        refactored,
        warnings = warnings.len(),
        "Workflow translated"
    );

    TranslationResult {
        code,
        node_count: workflow.nodes.len(),
        refactored,
        warnings,
    }
}
