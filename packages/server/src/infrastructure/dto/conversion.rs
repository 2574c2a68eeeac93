//! Conversion logic between DTOs and domain entities.

use chatroom_shared::time::timestamp_to_rfc3339;

use crate::domain::entity::{ChatEvent, Session};
use crate::infrastructure::dto::{http::SessionSummaryDto, websocket::ChatEventDto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ChatEvent> for ChatEventDto {
    fn from(event: &ChatEvent) -> Self {
        Self {
            timestamp: event.timestamp().value(),
            name: event.name().as_str().to_string(),
            text: event.text().as_str().to_string(),
        }
    }
}

impl From<&Session> for SessionSummaryDto {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id.as_str().to_string(),
            name: session.display_name.as_str().to_string(),
            connected_at: timestamp_to_rfc3339(session.connected_at.value()),
        }
    }
}
