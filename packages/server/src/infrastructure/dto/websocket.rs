//! WebSocket frame DTOs.
//!
//! ```text
//! server -> client: [ { "timestamp": <int64 ms>, "name": <string>, "text": <string> }, ... ]
//! client -> server: { "text": <string> }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::value_object::SYSTEM_DISPLAY_NAME;

/// One chat event inside an outbound frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatEventDto {
    pub timestamp: i64,
    pub name: String,
    pub text: String,
}

impl ChatEventDto {
    /// Whether the event was produced by the server rather than a participant
    pub fn is_system(&self) -> bool {
        self.name == SYSTEM_DISPLAY_NAME
    }
}

/// Inbound frame sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatTextDto {
    pub text: String,
}
