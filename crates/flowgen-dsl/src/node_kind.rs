// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Recognised node type families.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

/// Node types the code generator has a dedicated emitter for.
///
/// The wire form is the last segment of a dotted node type, so both
/// `httpRequest` and `n8n-nodes-base.httpRequest` resolve to
/// [`NodeKind::HttpRequest`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NodeKind {
    /// Outbound HTTP call
    HttpRequest,
    /// Constant value assignments
    Set,
    /// Caller-authored JavaScript
    Function,
}

impl NodeKind {
    /// Resolve a (possibly dotted) node type identifier.
    pub fn from_type(node_type: &str) -> Option<Self> {
        type_key(node_type).parse().ok()
    }

    /// Registry key for this kind.
    pub fn key(&self) -> &str {
        self.as_ref()
    }
}

/// Last dotted segment of a node type identifier.
pub fn type_key(node_type: &str) -> &str {
    node_type.rsplit('.').next().unwrap_or(node_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bare_type() {
        assert_eq!(NodeKind::from_type("httpRequest"), Some(NodeKind::HttpRequest));
        assert_eq!(NodeKind::from_type("set"), Some(NodeKind::Set));
        assert_eq!(NodeKind::from_type("function"), Some(NodeKind::Function));
    }

    #[test]
    fn test_from_dotted_type() {
        assert_eq!(
            NodeKind::from_type("n8n-nodes-base.httpRequest"),
            Some(NodeKind::HttpRequest)
        );
        assert_eq!(NodeKind::from_type("n8n-nodes-base.set"), Some(NodeKind::Set));
    }

    #[test]
    fn test_unknown_types() {
        assert_eq!(NodeKind::from_type("n8n-nodes-base.if"), None);
        assert_eq!(NodeKind::from_type("n8n-nodes-base.functionItem"), None);
        assert_eq!(NodeKind::from_type(""), None);
    }

    #[test]
    fn test_key_round_trip() {
        for name in NodeKind::VARIANTS {
            let kind = NodeKind::from_type(name).unwrap();
            assert_eq!(kind.key(), *name);
        }
    }

    #[test]
    fn test_type_key() {
        assert_eq!(type_key("a.b.c"), "c");
        assert_eq!(type_key("plain"), "plain");
        assert_eq!(type_key("trailing."), "");
    }
}
