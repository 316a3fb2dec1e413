// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Refactoring of generated code.
//!
//! The [`Refactorer`] runs the deterministic rule stage and then, when asked
//! and when a rewriter is configured, an AI-assisted stage. The AI stage is
//! fail-open: any error is logged and the rule-stage output is returned.

pub mod rules;

use std::sync::Arc;

use flowgen_ai::{CodeRewriter, OpenAiRewriter};
use tracing::{debug, info, instrument, warn};

pub use rules::{RewriteRule, apply_rules, rules};

/// A refactor request: free-form intent plus the AI opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefactorIntent {
    /// Free-form instruction
    pub text: String,
    /// Whether the AI stage may run
    pub use_ai: bool,
}

impl RefactorIntent {
    /// An intent with the AI stage enabled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_ai: true,
        }
    }

    /// Enable or disable the AI stage.
    pub fn with_ai(mut self, use_ai: bool) -> Self {
        self.use_ai = use_ai;
        self
    }
}

/// Two-stage refactor pipeline.
#[derive(Clone, Default)]
pub struct Refactorer {
    rewriter: Option<Arc<dyn CodeRewriter>>,
}

impl std::fmt::Debug for Refactorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refactorer")
            .field("rewriter", &self.rewriter.is_some())
            .field("ai_available", &self.ai_available())
            .finish()
    }
}

impl Refactorer {
    /// Create a refactorer with an optional AI rewriter.
    pub fn new(rewriter: Option<Arc<dyn CodeRewriter>>) -> Self {
        Self { rewriter }
    }

    /// A refactorer that only applies the rule table.
    pub fn rules_only() -> Self {
        Self { rewriter: None }
    }

    /// Attach an AI rewriter.
    pub fn with_rewriter(mut self, rewriter: Arc<dyn CodeRewriter>) -> Self {
        self.rewriter = Some(rewriter);
        self
    }

    /// A refactorer backed by the chat-completion rewriter configured from
    /// the environment. Without `OPENAI_API_KEY` the AI stage is skipped.
    pub fn from_env() -> Self {
        Self::new(Some(Arc::new(OpenAiRewriter::from_env())))
    }

    /// Whether the AI stage would run for an intent that asks for it.
    pub fn ai_available(&self) -> bool {
        self.rewriter
            .as_ref()
            .is_some_and(|rewriter| rewriter.is_available())
    }

    /// Refactor `code` according to `intent`.
    ///
    /// An empty intent returns the code unchanged. Never fails.
    #[instrument(skip(self, code), fields(code_len = code.len()))]
    pub async fn refactor(&self, code: &str, intent: &str, use_ai: bool) -> String {
        if intent.is_empty() {
            return code.to_string();
        }

        let current = apply_rules(code, intent);

        if !use_ai {
            return current;
        }

        let Some(rewriter) = self.rewriter.as_ref().filter(|r| r.is_available()) else {
            debug!("No AI rewriter available, keeping rule-stage output");
            return current;
        };

        match rewriter.rewrite(&current, intent).await {
            Ok(rewritten) => {
                info!(bytes = rewritten.len(), "AI refactor applied");
                rewritten
            }
            Err(e) => {
                warn!(error = %e, "AI refactor failed, keeping rule-stage output");
                current
            }
        }
    }

    /// Refactor with a [`RefactorIntent`].
    pub async fn refactor_with(&self, code: &str, intent: &RefactorIntent) -> String {
        self.refactor(code, &intent.text, intent.use_ai).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_defaults_to_ai() {
        let intent = RefactorIntent::new("simplify");
        assert!(intent.use_ai);
        assert!(!intent.with_ai(false).use_ai);
    }

    #[test]
    fn test_rules_only_has_no_ai() {
        let refactorer = Refactorer::rules_only();
        assert!(!refactorer.ai_available());
        assert!(format!("{:?}", refactorer).contains("rewriter: false"));
    }
}
