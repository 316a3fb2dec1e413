// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rewrite capability trait.

use async_trait::async_trait;

use crate::error::Result;

/// A strategy that rewrites generated code according to a free-form intent.
///
/// Implementations are optional collaborators: callers check
/// [`is_available`](CodeRewriter::is_available) before invoking
/// [`rewrite`](CodeRewriter::rewrite) and treat failures as non-fatal.
#[async_trait]
pub trait CodeRewriter: Send + Sync {
    /// Whether the rewriter is configured well enough to be called.
    fn is_available(&self) -> bool;

    /// Rewrite `code` according to `intent`, returning the replacement code.
    async fn rewrite(&self, code: &str, intent: &str) -> Result<String>;
}
