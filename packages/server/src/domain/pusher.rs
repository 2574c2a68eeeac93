//! メッセージ送信（通知）のインターフェース

use async_trait::async_trait;

use super::{entity::Session, error::SendError, value_object::SessionId};

/// 1 接続へフレームを送信する能力
///
/// 具体的なトランスポートに依存しないための最小のインターフェースです。
/// 送信はブロックせず、失敗はその接続だけに閉じます。
#[cfg_attr(test, mockall::automock)]
pub trait FrameSink: Send + Sync {
    fn send(&self, frame: &str) -> Result<(), SendError>;
}

/// ブロードキャストの結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    /// 送信に成功したセッション数
    pub delivered: usize,
    /// 送信に失敗したセッション
    pub failed: Vec<SessionId>,
}

impl BroadcastReport {
    pub fn failed_for(&self, session_id: &SessionId) -> bool {
        self.failed.iter().any(|id| id == session_id)
    }
}

/// メッセージ送信の抽象化
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 特定のセッションにだけ送信
    async fn push_to(&self, session: &Session, frame: &str) -> Result<(), SendError>;

    /// 登録中の全セッションに同じフレームを送信
    ///
    /// 個々の送信失敗はブロードキャスト全体を中断しません。
    async fn broadcast(&self, frame: &str) -> BroadcastReport;
}
