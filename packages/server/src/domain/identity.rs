//! 認証済み ID の解決

use std::collections::HashMap;

use super::value_object::DisplayName;

/// ハンドシェイク時のコンテキスト
///
/// トランスポート層がハンドシェイクから取り出した属性（ヘッダー等）を保持します。
/// キーは小文字に正規化されます。
#[derive(Debug, Default, Clone)]
pub struct Handshake {
    attributes: HashMap<String, String>,
}

impl Handshake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.attributes
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// ハンドシェイクから認証済みの表示名を解決する
///
/// `None` の場合はゲスト名が割り当てられます。
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, handshake: &Handshake) -> Option<DisplayName>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_attribute_lookup_is_case_insensitive() {
        // テスト項目: 属性名の大文字小文字を区別せずに取得できる
        // given (前提条件):
        let handshake = Handshake::new().with_attribute("X-Authenticated-User", "alice");

        // when (操作):
        let value = handshake.attribute("x-authenticated-user");

        // then (期待する結果):
        assert_eq!(value, Some("alice"));
    }

    #[test]
    fn test_handshake_missing_attribute() {
        // テスト項目: 存在しない属性は None
        // given (前提条件):
        let handshake = Handshake::new();

        // when (操作):
        let value = handshake.attribute("x-authenticated-user");

        // then (期待する結果):
        assert_eq!(value, None);
    }
}
