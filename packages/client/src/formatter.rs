//! Message formatting utilities for client display.

use chatroom_server::infrastructure::dto::websocket::ChatEventDto;
use chatroom_shared::time::timestamp_to_local_time;

use crate::domain::{FrameKind, SeenEvents, classify_frame};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format an inbound frame, skipping events already shown in this session
    ///
    /// Returns `None` when every event of the frame was displayed before.
    pub fn format_frame(seen: &mut SeenEvents, events: Vec<ChatEventDto>) -> Option<String> {
        let kind = classify_frame(&events);
        let was_empty = events.is_empty();
        let fresh = seen.retain_unseen(events);
        if fresh.is_empty() && !was_empty {
            return None;
        }

        Some(match kind {
            FrameKind::History => Self::format_history(&fresh),
            FrameKind::Broadcast => Self::format_broadcast(&fresh),
        })
    }

    /// Format the history frame received right after connecting
    pub fn format_history(events: &[ChatEventDto]) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        if events.is_empty() {
            output.push_str("(No messages yet)\n");
        } else {
            output.push_str(&format!("Last {} message(s):\n", events.len()));
            for event in events {
                output.push_str(&Self::format_event(event));
            }
        }
        output.push_str("============================================================\n");
        output
    }

    /// Format a broadcast frame
    pub fn format_broadcast(events: &[ChatEventDto]) -> String {
        let mut output = String::from("\n");
        for event in events {
            output.push_str(&Self::format_event(event));
        }
        output
    }

    /// Format one event as a single line
    ///
    /// System events are rendered as `* text`, everything else as `name: text`.
    pub fn format_event(event: &ChatEventDto) -> String {
        let time = timestamp_to_local_time(event.timestamp);
        if event.is_system() {
            format!("[{}] * {}\n", time, event.text)
        } else {
            format!("[{}] {}: {}\n", time, event.name, event.text)
        }
    }

    /// Format a frame that could not be decoded
    pub fn format_raw_message(text: &str) -> String {
        format!("\n(raw) {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, text: &str) -> ChatEventDto {
        ChatEventDto {
            timestamp: 1672531200000,
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_format_user_event() {
        // テスト項目: ユーザーのメッセージは "name: text" 形式
        // given (前提条件):
        let e = event("Alice", "hi");

        // when (操作):
        let result = MessageFormatter::format_event(&e);

        // then (期待する結果):
        assert!(result.starts_with('['));
        assert!(result.ends_with("] Alice: hi\n"));
    }

    #[test]
    fn test_format_system_event() {
        // テスト項目: システムメッセージは "* text" 形式
        // given (前提条件):
        let e = event("SYSTEM MESSAGE", "Alice joined the room.");

        // when (操作):
        let result = MessageFormatter::format_event(&e);

        // then (期待する結果):
        assert!(result.ends_with("] * Alice joined the room.\n"));
        assert!(!result.contains("SYSTEM MESSAGE"));
    }

    #[test]
    fn test_format_frame_with_broadcast_before_history() {
        // テスト項目: 履歴より先に届いたブロードキャストは履歴扱いされず、履歴側で二重表示されない
        // given (前提条件):
        let mut seen = SeenEvents::new();
        let early = event("Bob", "hi");
        let history = vec![event("Alice", "earlier"), early.clone()];

        // when (操作):
        let first = MessageFormatter::format_frame(&mut seen, vec![early]).unwrap();
        let second = MessageFormatter::format_frame(&mut seen, history).unwrap();

        // then (期待する結果):
        assert!(!first.contains("message(s):"));
        assert!(first.contains("Bob: hi"));
        assert!(second.contains("Last 1 message(s):"));
        assert!(second.contains("Alice: earlier"));
        assert!(!second.contains("Bob: hi"));
    }

    #[test]
    fn test_format_frame_skips_fully_duplicated_frame() {
        // テスト項目: すべて表示済みのフレームは何も出力しない
        // given (前提条件):
        let mut seen = SeenEvents::new();
        MessageFormatter::format_frame(&mut seen, vec![event("Bob", "hi")]);

        // when (操作):
        let result = MessageFormatter::format_frame(&mut seen, vec![event("Bob", "hi")]);

        // then (期待する結果):
        assert!(result.is_none());
    }

    #[test]
    fn test_format_frame_empty_history() {
        // テスト項目: 空のフレームは空の履歴として表示される
        // given (前提条件):
        let mut seen = SeenEvents::new();

        // when (操作):
        let result = MessageFormatter::format_frame(&mut seen, vec![]).unwrap();

        // then (期待する結果):
        assert!(result.contains("(No messages yet)"));
    }

    #[test]
    fn test_format_empty_history() {
        // テスト項目: 空の履歴は "(No messages yet)" と表示される
        // given (前提条件):

        // when (操作):
        let result = MessageFormatter::format_history(&[]);

        // then (期待する結果):
        assert!(result.contains("(No messages yet)"));
    }

    #[test]
    fn test_format_history_lists_events_in_order() {
        // テスト項目: 履歴は古い順に 1 行ずつ表示される
        // given (前提条件):
        let events = vec![event("Alice", "first"), event("Bob", "second")];

        // when (操作):
        let result = MessageFormatter::format_history(&events);

        // then (期待する結果):
        assert!(result.contains("Last 2 message(s):"));
        let first = result.find("Alice: first").unwrap();
        let second = result.find("Bob: second").unwrap();
        assert!(first < second);
    }
}
