//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を `FrameSink` として包む
//! - レジストリの全セッションへのブロードキャスト
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! UI 層は送信チャンネルを生成し、受信側を WebSocket への書き込みタスクで消費します。
//! ここでは送信側だけを扱うため、遅い接続は自分の書き込みタスクだけを止めます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{BroadcastReport, FrameSink, MessagePusher, SendError, Session, SessionRepository};

/// 接続ごとの送信チャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// 送信チャンネルを使った FrameSink
pub struct ChannelFrameSink {
    sender: PusherChannel,
}

impl ChannelFrameSink {
    pub fn new(sender: PusherChannel) -> Self {
        Self { sender }
    }
}

impl FrameSink for ChannelFrameSink {
    fn send(&self, frame: &str) -> Result<(), SendError> {
        self.sender
            .send(frame.to_string())
            .map_err(|_| SendError::Closed)
    }
}

/// セッションレジストリを使った MessagePusher 実装
pub struct RegistryMessagePusher {
    sessions: Arc<dyn SessionRepository>,
}

impl RegistryMessagePusher {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl MessagePusher for RegistryMessagePusher {
    async fn push_to(&self, session: &Session, frame: &str) -> Result<(), SendError> {
        session.sink().send(frame)?;
        tracing::debug!("Pushed frame to session '{}'", session.id);
        Ok(())
    }

    async fn broadcast(&self, frame: &str) -> BroadcastReport {
        // レジストリのロックは列挙の間だけ保持される
        let sessions = self.sessions.all_sessions().await;

        let mut report = BroadcastReport::default();
        for session in sessions {
            match session.sink().send(frame) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to push frame to session '{}' ({}): {}",
                        session.id,
                        session.display_name,
                        e
                    );
                    report.failed.push(session.id);
                }
            }
        }
        tracing::debug!(
            "Broadcast delivered to {} session(s), {} failed",
            report.delivered,
            report.failed.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DisplayName, MockFrameSink, SessionId, Timestamp},
        infrastructure::repository::InMemorySessionRepository,
    };

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - push_to: 特定のセッションへの送信
    // - broadcast: 全セッションへの同一フレームの送信
    // - 一部の送信失敗が他のセッションへの配信を妨げないこと
    // ========================================

    fn channel_session(id: &str) -> (Session, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Session::new(
            SessionId::new(id.to_string()).unwrap(),
            DisplayName::new(id.to_string()).unwrap(),
            Timestamp::new(1000),
            Arc::new(ChannelFrameSink::new(tx)),
        );
        (session, rx)
    }

    #[test]
    fn test_channel_sink_fails_when_receiver_dropped() {
        // テスト項目: 受信側が閉じたチャンネルへの送信は Closed エラー
        // given (前提条件):
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = ChannelFrameSink::new(tx);
        drop(rx);

        // when (操作):
        let result = sink.send("[]");

        // then (期待する結果):
        assert_eq!(result, Err(SendError::Closed));
    }

    #[tokio::test]
    async fn test_push_to_only_reaches_target() {
        // テスト項目: push_to は指定したセッションにだけ届く
        // given (前提条件):
        let repo = Arc::new(InMemorySessionRepository::new());
        let (alice, mut alice_rx) = channel_session("alice");
        let (bob, mut bob_rx) = channel_session("bob");
        repo.register(alice.clone()).await;
        repo.register(bob).await;
        let pusher = RegistryMessagePusher::new(repo);

        // when (操作):
        let result = pusher.push_to(&alice, "[]").await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(alice_rx.recv().await, Some("[]".to_string()));
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_sessions() {
        // テスト項目: 全セッションに同じフレームが届く
        // given (前提条件):
        let repo = Arc::new(InMemorySessionRepository::new());
        let (alice, mut alice_rx) = channel_session("alice");
        let (bob, mut bob_rx) = channel_session("bob");
        repo.register(alice).await;
        repo.register(bob).await;
        let pusher = RegistryMessagePusher::new(repo);

        // when (操作):
        let report = pusher.broadcast("frame").await;

        // then (期待する結果):
        assert_eq!(report.delivered, 2);
        assert!(report.failed.is_empty());
        assert_eq!(alice_rx.recv().await, Some("frame".to_string()));
        assert_eq!(bob_rx.recv().await, Some("frame".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_continues_past_single_failure() {
        // テスト項目: 5 セッション中 1 つが常に送信失敗しても、残り 4 つには届く
        // given (前提条件):
        let repo = Arc::new(InMemorySessionRepository::new());
        let mut receivers = Vec::new();
        for n in 0..4 {
            let (session, rx) = channel_session(&format!("user{}", n));
            repo.register(session).await;
            receivers.push(rx);
        }
        let mut failing = MockFrameSink::new();
        failing
            .expect_send()
            .times(1)
            .returning(|_| Err(SendError::Transport("broken pipe".to_string())));
        let broken_id = SessionId::new("broken".to_string()).unwrap();
        repo.register(Session::new(
            broken_id.clone(),
            DisplayName::new("broken".to_string()).unwrap(),
            Timestamp::new(1000),
            Arc::new(failing),
        ))
        .await;
        let pusher = RegistryMessagePusher::new(repo.clone());

        // when (操作):
        let report = pusher.broadcast("frame").await;

        // then (期待する結果):
        assert_eq!(report.delivered, 4);
        assert_eq!(report.failed, vec![broken_id.clone()]);
        assert!(report.failed_for(&broken_id));
        for mut rx in receivers {
            assert_eq!(rx.recv().await, Some("frame".to_string()));
        }
        // ブロードキャスト自体は登録解除しない
        assert_eq!(repo.count().await, 5);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_sessions() {
        // テスト項目: セッションが無くてもエラーにならない
        // given (前提条件):
        let repo = Arc::new(InMemorySessionRepository::new());
        let pusher = RegistryMessagePusher::new(repo);

        // when (操作):
        let report = pusher.broadcast("frame").await;

        // then (期待する結果):
        assert_eq!(report, BroadcastReport::default());
    }
}
