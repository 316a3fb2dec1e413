// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Deterministic rewrite rules.
//!
//! Each rule is keyed on a trigger substring of the intent and applies a
//! whole-word regex substitution to every line of the code. Matching is
//! lexical only: occurrences inside string literals and comments are
//! rewritten too.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// A named lexical rewrite.
#[derive(Debug)]
pub struct RewriteRule {
    /// Rule name, for logging
    pub name: &'static str,
    /// Substring of the intent that enables the rule
    pub trigger: &'static str,
    /// Pattern replaced on each line
    pub pattern: Regex,
    /// Replacement text
    pub replacement: &'static str,
}

impl RewriteRule {
    /// Whether the intent enables this rule.
    pub fn is_triggered_by(&self, intent: &str) -> bool {
        intent.contains(self.trigger)
    }

    /// Apply the substitution to every line of `code`.
    pub fn apply(&self, code: &str) -> String {
        code.split('\n')
            .map(|line| self.pattern.replace_all(line, self.replacement))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();

/// The built-in rule table.
pub fn rules() -> &'static [RewriteRule] {
    RULES.get_or_init(|| {
        vec![RewriteRule {
            name: "prefer-const",
            trigger: "use const",
            pattern: Regex::new(r"\b(?:let|var)\b").expect("static pattern"),
            replacement: "const",
        }]
    })
}

/// Apply every rule whose trigger appears in `intent`.
///
/// Never fails; with no triggered rule the code is returned unchanged.
pub fn apply_rules(code: &str, intent: &str) -> String {
    let mut current = code.to_string();
    for rule in rules() {
        if rule.is_triggered_by(intent) {
            debug!(rule = rule.name, "Applying rewrite rule");
            current = rule.apply(&current);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_const_replaces_let_and_var() {
        let code = "let a = 1;\nvar b = 2;\nconst c = 3;";
        assert_eq!(
            apply_rules(code, "please use const everywhere"),
            "const a = 1;\nconst b = 2;\nconst c = 3;"
        );
    }

    #[test]
    fn test_whole_words_only() {
        let code = "let letter = variable; // outlet var";
        assert_eq!(
            apply_rules(code, "use const"),
            "const letter = variable; // outlet const"
        );
    }

    #[test]
    fn test_rewrites_inside_strings() {
        assert_eq!(
            apply_rules(r#"console.log("let it be");"#, "use const"),
            r#"console.log("const it be");"#
        );
    }

    #[test]
    fn test_no_trigger_is_identity() {
        let code = "let a = 1;\n\n  var b;\n";
        assert_eq!(apply_rules(code, "simplify"), code);
        assert_eq!(apply_rules(code, "Use Const"), code);
    }

    #[test]
    fn test_line_structure_preserved() {
        let code = "\nlet a;\n\n";
        assert_eq!(apply_rules(code, "use const"), "\nconst a;\n\n");
    }

    #[test]
    fn test_rule_table() {
        let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["prefer-const"]);
    }
}
