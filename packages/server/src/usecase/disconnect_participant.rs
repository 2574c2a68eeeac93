//! UseCase: 参加者切断処理
//!
//! 切断時はレジストリから削除するだけで、退出通知はブロードキャストしません。

use std::sync::Arc;

use crate::domain::{Session, SessionId, SessionRepository};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    sessions: Arc<dyn SessionRepository>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// 参加者切断を実行
    ///
    /// 既に登録解除されている場合は何もしません（切断と後片付けが競合し得るため）。
    ///
    /// # Returns
    ///
    /// 登録解除したセッション。既に存在しなかった場合は `None`
    pub async fn execute(&self, session_id: &SessionId) -> Option<Session> {
        let removed = self.sessions.unregister(session_id).await;
        match &removed {
            Some(session) => tracing::info!(
                "Session '{}' ({}) unregistered",
                session.id,
                session.display_name
            ),
            None => tracing::debug!("Session '{}' was already unregistered", session_id),
        }
        removed
    }

    /// 残りの参加者数を取得
    pub async fn count_remaining_participants(&self) -> usize {
        self.sessions.count().await
    }
}
