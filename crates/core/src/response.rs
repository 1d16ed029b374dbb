//! The standard response envelope.
//!
//! Every API response, success or error, is wrapped in the same shape:
//! `{status: "success"|"error", data: <payload or {}>, message: string|null}`.

use serde::{Deserialize, Serialize};

/// Uniform envelope around every API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardResponse<T> {
    pub status: String,
    pub data: T,
    pub message: Option<String>,
}

impl<T> StandardResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data,
            message: Some(message.into()),
        }
    }
}

impl StandardResponse<serde_json::Value> {
    /// Builds an error envelope. `data` is always an empty object on error
    /// paths.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            data: serde_json::json!({}),
            message: Some(message.into()),
        }
    }
}
