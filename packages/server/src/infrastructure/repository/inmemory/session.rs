//! InMemory セッションレジストリ

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Session, SessionId, SessionRepository};

/// インメモリのセッションレジストリ
///
/// 列挙はロック中にコピーを作って返すため、呼び出し側はロックを保持せずに
/// 送信処理を行えます。
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn register(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        if let Some(previous) = sessions.insert(session.id.clone(), session) {
            tracing::debug!("Session '{}' re-registered, replacing previous entry", previous.id);
        }
    }

    async fn unregister(&self, session_id: &SessionId) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id)
    }

    async fn get(&self, session_id: &SessionId) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    async fn all_sessions(&self) -> Vec<Session> {
        let sessions = self.sessions.read().await;
        sessions.values().cloned().collect()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
