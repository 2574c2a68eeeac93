//! 値オブジェクト
//!
//! 生成時に検証を行い、以降は不変です。

use std::fmt;

use super::error::ValueObjectError;

/// システムが生成するイベントの送信者名
pub const SYSTEM_DISPLAY_NAME: &str = "SYSTEM MESSAGE";

/// セッション ID（トランスポート層が接続時に割り当てる不透明な識別子）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(super) String);

impl SessionId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptySessionId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 表示名
///
/// 前後の空白は取り除かれ、空文字列は許可されません。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayName(pub(super) String);

impl DisplayName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyDisplayName);
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// システムメッセージ用の表示名
    pub fn system() -> Self {
        Self(SYSTEM_DISPLAY_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// メッセージ本文
///
/// UTF-8 文字列。長さの制限はこの層では行いません。空文字列のみ拒否します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(pub(super) String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyMessageText);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_rejects_empty_string() {
        // テスト項目: 空文字列の SessionId は生成できない
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = SessionId::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptySessionId));
    }

    #[test]
    fn test_display_name_is_trimmed() {
        // テスト項目: 表示名の前後の空白が取り除かれる
        // given (前提条件):
        let value = "  Alice ".to_string();

        // when (操作):
        let name = DisplayName::new(value).unwrap();

        // then (期待する結果):
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_display_name_rejects_blank_string() {
        // テスト項目: 空白のみの表示名は生成できない
        // given (前提条件):
        let value = "   ".to_string();

        // when (操作):
        let result = DisplayName::try_from(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyDisplayName));
    }

    #[test]
    fn test_system_display_name() {
        // テスト項目: システム表示名は固定値
        // given (前提条件):

        // when (操作):
        let name = DisplayName::system();

        // then (期待する結果):
        assert_eq!(name.as_str(), "SYSTEM MESSAGE");
    }

    #[test]
    fn test_message_text_keeps_whitespace() {
        // テスト項目: メッセージ本文の空白はそのまま保持される
        // given (前提条件):
        let value = "  hi  ".to_string();

        // when (操作):
        let text = MessageText::new(value).unwrap();

        // then (期待する結果):
        assert_eq!(text.as_str(), "  hi  ");
    }

    #[test]
    fn test_message_text_rejects_empty_string() {
        // テスト項目: 空文字列のメッセージ本文は生成できない
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = MessageText::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyMessageText));
    }
}
