//! Response envelopes shared by every backend endpoint.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`camelCase`) so payloads
//! deserialize without adapters. Optional fields are omitted on output.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `{ success, data?, error?, message? }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Best human-readable failure text: `error`, then `message`.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// One page of a list endpoint. `page` is 1-based.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}
