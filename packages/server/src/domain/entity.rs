//! エンティティ

use std::{fmt, sync::Arc};

use super::{
    pusher::FrameSink,
    value_object::{DisplayName, MessageText, SessionId, Timestamp},
};

/// チャットイベント（メッセージまたはシステム通知）
///
/// 生成後は不変です。履歴バッファと全てのブロードキャスト先で値として共有されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    timestamp: Timestamp,
    name: DisplayName,
    text: MessageText,
}

impl ChatEvent {
    pub fn new(name: DisplayName, text: MessageText, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            name,
            text,
        }
    }

    /// システムメッセージを作成
    pub fn system(text: MessageText, timestamp: Timestamp) -> Self {
        Self::new(DisplayName::system(), text, timestamp)
    }

    /// 参加通知（"<name> joined the room."）を作成
    pub fn joined(name: &DisplayName, timestamp: Timestamp) -> Self {
        let text = MessageText(format!("{} joined the room.", name.as_str()));
        Self::system(text, timestamp)
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

/// 接続中の参加者
///
/// `sink` は接続処理側（UI 層）が生成したもので、Session はその論理的なラッパーです。
#[derive(Clone)]
pub struct Session {
    pub id: SessionId,
    pub display_name: DisplayName,
    pub connected_at: Timestamp,
    sink: Arc<dyn FrameSink>,
}

impl Session {
    pub fn new(
        id: SessionId,
        display_name: DisplayName,
        connected_at: Timestamp,
        sink: Arc<dyn FrameSink>,
    ) -> Self {
        Self {
            id,
            display_name,
            connected_at,
            sink,
        }
    }

    pub fn sink(&self) -> &Arc<dyn FrameSink> {
        &self.sink
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("connected_at", &self.connected_at)
            .finish_non_exhaustive()
    }
}
