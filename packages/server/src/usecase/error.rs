//! UseCase errors.

use thiserror::Error;

use crate::domain::{DecodeError, EncodeError, SendError};

/// 接続処理のエラー
///
/// いずれの場合も接続は閉じたものとして扱われ、セッションは登録解除済みです。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// 新しい接続への履歴の送信に失敗
    #[error("failed to deliver history to the new connection: {0}")]
    HistoryDeliveryFailed(SendError),

    /// 新しい接続への参加通知の送信に失敗
    #[error("failed to deliver join notification to the new connection")]
    JoinDeliveryFailed,

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// メッセージ送信のエラー
///
/// どの場合も接続は開いたままで、フレームが破棄されるだけです。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// 空のペイロード、または空の本文
    #[error("empty message")]
    EmptyMessage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// 送信元のセッションが既に登録解除されている
    #[error("session '{0}' is not registered")]
    SessionNotFound(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
