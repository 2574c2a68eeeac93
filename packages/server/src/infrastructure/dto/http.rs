//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Connected session, as listed by `GET /api/sessions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummaryDto {
    pub session_id: String,
    pub name: String,
    /// RFC 3339 (UTC)
    pub connected_at: String,
}
