// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error type tests for flowgen-management-sdk.

use flowgen_management_sdk::SdkError;

#[test]
fn test_config_error_display() {
    let err = SdkError::Config("missing url".to_string());
    assert!(err.to_string().contains("configuration error"));
    assert!(err.to_string().contains("missing url"));
}

#[test]
fn test_connection_error_display() {
    let err = SdkError::Connection("connection refused".to_string());
    assert!(err.to_string().contains("connection error"));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_server_error_display() {
    let err = SdkError::Server {
        status: 500,
        body: "Internal error".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("server error"));
    assert!(display.contains("500"));
    assert!(display.contains("Internal error"));
    assert_eq!(err.status(), Some(500));
}

#[test]
fn test_serialization_error_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SdkError = serde_err.into();
    assert!(err.to_string().contains("serialization error"));
    assert_eq!(err.status(), None);
}
