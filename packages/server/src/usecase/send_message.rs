//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 受信フレームのデコード、履歴への追加、全セッションへのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 送信者自身を含む全員に同じフレームが届くことを保証
//! - 空のメッセージや不正なフレームで履歴が変化しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人が接続している状態でのメッセージ送信
//! - 異常系：空のペイロード、空の本文、JSON ではないフレーム
//! - エッジケース：登録解除済みのセッションからの送信

use std::sync::Arc;

use chatroom_shared::time::Clock;

use crate::domain::{
    ChatEvent, ChatHistoryRepository, EventCodec, MessagePusher, MessageText, SessionId,
    SessionRepository, Timestamp,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    sessions: Arc<dyn SessionRepository>,
    history: Arc<dyn ChatHistoryRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    codec: Arc<dyn EventCodec>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        history: Arc<dyn ChatHistoryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        codec: Arc<dyn EventCodec>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            history,
            message_pusher,
            codec,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信元のセッション ID
    /// * `frame` - 受信したテキストフレーム（`{"text": ...}`）
    ///
    /// # Returns
    ///
    /// * `Ok(ChatEvent)` - 履歴に追加され、ブロードキャストされたイベント
    /// * `Err(SendMessageError)` - フレームは破棄された（接続は開いたまま）
    pub async fn execute(
        &self,
        session_id: &SessionId,
        frame: &str,
    ) -> Result<ChatEvent, SendMessageError> {
        // 1. 空のペイロードは無視
        if frame.is_empty() {
            return Err(SendMessageError::EmptyMessage);
        }

        // 2. デコード
        let text = self.codec.decode_text(frame)?;
        let text = MessageText::new(text).map_err(|_| SendMessageError::EmptyMessage)?;

        // 3. 登録されている表示名でイベントを作成
        let session = self
            .sessions
            .get(session_id)
            .await
            .ok_or_else(|| SendMessageError::SessionNotFound(session_id.as_str().to_string()))?;
        let event = ChatEvent::new(
            session.display_name,
            text,
            Timestamp::new(self.clock.now_millis()),
        );

        // 4. 履歴に追加してブロードキャスト
        let outbound = self.codec.encode_events(std::slice::from_ref(&event))?;
        self.history.append(event.clone()).await;
        let report = self.message_pusher.broadcast(&outbound).await;
        let history_len = self.history.len().await;
        tracing::debug!(
            "Message from '{}' delivered to {} session(s), history {}/{}",
            event.name(),
            report.delivered,
            history_len,
            self.history.capacity()
        );

        Ok(event)
    }
}
