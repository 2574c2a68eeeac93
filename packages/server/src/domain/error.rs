//! Domain errors.

use thiserror::Error;

/// 値オブジェクトの生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("session id must not be empty")]
    EmptySessionId,

    #[error("display name must not be empty")]
    EmptyDisplayName,

    #[error("message text must not be empty")]
    EmptyMessageText,
}

/// 1 接続へのフレーム送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// 接続が既に閉じている
    #[error("connection is closed")]
    Closed,

    /// トランスポート層のエラー
    #[error("transport error: {0}")]
    Transport(String),
}

/// 受信フレームのデコードエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed frame: {0}")]
    Malformed(String),
}

/// 送信フレームのエンコードエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("failed to encode events: {0}")]
    Serialize(String),
}
