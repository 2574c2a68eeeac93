//! Domain logic for client-side operations.
//!
//! Pure functions deciding how the client reacts to errors.

use std::collections::{HashSet, VecDeque};

use chatroom_server::infrastructure::dto::websocket::ChatEventDto;

use crate::error::ClientError;

/// How many recently displayed events are remembered for duplicate detection
const SEEN_EVENTS_CAPACITY: usize = 256;

/// Check if the client should exit immediately based on the error type.
///
/// A rejected handshake or a malformed request fails the same way on every attempt.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::HandshakeRejected(_) | ClientError::InvalidRequest(_)
    )
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}

/// Kind of an inbound frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The history snapshot sent once right after connecting
    History,
    /// A single event fanned out to every participant
    Broadcast,
}

/// Classify a frame by its shape.
///
/// Broadcasts always carry exactly one event, so an empty or multi-event frame
/// is the history. A history of exactly one event is shown like a broadcast.
/// Arrival order is not used: another participant's broadcast may reach the
/// socket before the history frame.
pub fn classify_frame(events: &[ChatEventDto]) -> FrameKind {
    if events.len() == 1 {
        FrameKind::Broadcast
    } else {
        FrameKind::History
    }
}

/// Recently displayed events of one session.
///
/// A message broadcast while the server is still preparing the history can be
/// delivered both on its own and inside the history frame.
pub struct SeenEvents {
    order: VecDeque<ChatEventDto>,
    seen: HashSet<ChatEventDto>,
}

impl Default for SeenEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl SeenEvents {
    pub fn new() -> Self {
        Self {
            order: VecDeque::with_capacity(SEEN_EVENTS_CAPACITY),
            seen: HashSet::with_capacity(SEEN_EVENTS_CAPACITY),
        }
    }

    /// Keep only the events not displayed yet, and remember them
    pub fn retain_unseen(&mut self, events: Vec<ChatEventDto>) -> Vec<ChatEventDto> {
        let mut fresh = Vec::with_capacity(events.len());
        for event in events {
            if self.seen.contains(&event) {
                continue;
            }
            self.remember(event.clone());
            fresh.push(event);
        }
        fresh
    }

    fn remember(&mut self, event: ChatEventDto) {
        if self.order.len() == SEEN_EVENTS_CAPACITY
            && let Some(oldest) = self.order.pop_front()
        {
            self.seen.remove(&oldest);
        }
        self.seen.insert(event.clone());
        self.order.push_back(event);
    }
}
