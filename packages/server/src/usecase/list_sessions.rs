//! UseCase: 接続中セッションの一覧

use std::sync::Arc;

use crate::domain::{Session, SessionRepository};

/// 接続中セッション一覧のユースケース
pub struct ListSessionsUseCase {
    sessions: Arc<dyn SessionRepository>,
}

impl ListSessionsUseCase {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// 接続時刻順（同時刻なら表示名順）のセッション一覧
    pub async fn execute(&self) -> Vec<Session> {
        let mut sessions = self.sessions.all_sessions().await;
        sessions.sort_by(|a, b| {
            a.connected_at
                .cmp(&b.connected_at)
                .then_with(|| a.display_name.cmp(&b.display_name))
        });
        sessions
    }
}
