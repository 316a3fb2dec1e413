// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Flowgen Workflows - workflow translation to JavaScript
//!
//! This crate lowers an automation workflow (nodes plus connections) into a
//! standalone async JavaScript module and optionally refactors the result.
//!
//! # Pipeline
//!
//! ```text
//!     ┌─────────────┐      ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//!     │  Workflow   │      │   Emitter   │      │    Rule     │      │     AI      │
//!     │   (JSON)    │─────▶│  Registry   │─────▶│   Engine    │─────▶│  Rewriter   │
//!     │             │      │  (codegen)  │      │  (refactor) │      │ (optional)  │
//!     └─────────────┘      └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! 1. **Generate**: each node is emitted in stored order by the emitter for
//!    its type; unknown types become a comment.
//! 2. **Rules**: intent-triggered lexical rewrites (`use const`).
//! 3. **AI**: when requested and configured, the code is sent to the
//!    rewriter. Failures fall back to the rule-stage output.
//!
//! # Usage
//!
//! ```
//! use flowgen_dsl::{Node, Workflow};
//! use flowgen_workflows::compile;
//! use serde_json::json;
//!
//! let workflow = Workflow::new("demo").with_node(
//!     Node::new("Get Users", "n8n-nodes-base.httpRequest")
//!         .with_parameter("url", json!("https://api.example.com/users")),
//! );
//!
//! let code = compile(&workflow);
//! assert!(code.contains("const Get_Users = await axios("));
//! ```
//!
//! # Important Notes
//!
//! - The connection graph does not influence emission order; see
//!   [`validation`] for the warnings raised when it disagrees with list order.
//! - `function` nodes are injected verbatim. The generated program is as
//!   trustworthy as the workflow it came from.

#![deny(missing_docs)]

pub mod codegen;
pub mod compile;
pub mod refactor;
pub mod validation;

pub use codegen::context::EmitContext;
pub use codegen::nodes::{Emission, EmitterRegistry, NodeEmitter};
pub use codegen::{compile, compile_with_registry};
pub use compile::{TranslationResult, translate_workflow};
pub use refactor::{RefactorIntent, Refactorer, RewriteRule, apply_rules};
pub use validation::{
    ValidationResult, ValidationWarning, validate_workflow, validate_workflow_with_registry,
};
