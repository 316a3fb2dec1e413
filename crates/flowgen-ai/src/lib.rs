// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! AI-assisted rewriting of generated workflow code.
//!
//! The [`CodeRewriter`] trait is the pluggable capability the refactor
//! pipeline consults; [`OpenAiRewriter`] is the chat-completion backed
//! implementation. A rewriter without a credential reports itself as
//! unavailable and fails with [`AiError::Configuration`] if called anyway.
//!
//! # Example
//!
//! ```no_run
//! use flowgen_ai::{AiConfig, CodeRewriter, OpenAiRewriter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rewriter = OpenAiRewriter::new(AiConfig::from_env());
//! if rewriter.is_available() {
//!     let code = rewriter.rewrite("let a = 1;", "use const").await?;
//!     println!("{}", code);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod openai;
mod rewriter;

pub use config::{AiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{AiError, Result};
pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAiRewriter,
    SYSTEM_PROMPT,
};
pub use rewriter::CodeRewriter;
