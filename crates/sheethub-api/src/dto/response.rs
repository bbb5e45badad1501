//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /sum_type/{type}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumResponse {
    /// Total of `num_sum` over matching files.
    pub sum: f64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database status.
    pub database: String,
    /// Blob storage status.
    pub storage: String,
}
