//! ハンドシェイク属性による ID 解決
//!
//! 認証そのものは外部（リバースプロキシ等）の責務です。ここでは認証済みの
//! ユーザー名が載っている属性を読むだけで、内容の正しさは検証しません。

use crate::domain::{DisplayName, Handshake, IdentityResolver};

/// 既定の属性名（信頼できるリバースプロキシが設定するヘッダー）
pub const DEFAULT_IDENTITY_HEADER: &str = "x-authenticated-user";

/// 指定した属性の値を表示名として使う
#[derive(Debug, Clone)]
pub struct HeaderIdentityResolver {
    attribute: String,
}

impl HeaderIdentityResolver {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl Default for HeaderIdentityResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY_HEADER)
    }
}

impl IdentityResolver for HeaderIdentityResolver {
    fn resolve(&self, handshake: &Handshake) -> Option<DisplayName> {
        let value = handshake.attribute(&self.attribute)?;
        match DisplayName::new(value.to_string()) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!("Ignoring identity attribute '{}': {}", self.attribute, e);
                None
            }
        }
    }
}

/// 常に未認証として扱う（全員ゲスト）
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousIdentityResolver;

impl IdentityResolver for AnonymousIdentityResolver {
    fn resolve(&self, _handshake: &Handshake) -> Option<DisplayName> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_resolver_reads_configured_attribute() {
        // テスト項目: 設定した属性の値が表示名になる
        // given (前提条件):
        let resolver = HeaderIdentityResolver::default();
        let handshake = Handshake::new().with_attribute("X-Authenticated-User", "Alice");

        // when (操作):
        let name = resolver.resolve(&handshake);

        // then (期待する結果):
        assert_eq!(name.unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_header_resolver_without_attribute() {
        // テスト項目: 属性が無ければ None（ゲスト扱い）
        // given (前提条件):
        let resolver = HeaderIdentityResolver::new("x-user");
        let handshake = Handshake::new().with_attribute("x-authenticated-user", "Alice");

        // when (操作):
        let name = resolver.resolve(&handshake);

        // then (期待する結果):
        assert!(name.is_none());
    }

    #[test]
    fn test_header_resolver_ignores_blank_value() {
        // テスト項目: 空白のみの値は無視される
        // given (前提条件):
        let resolver = HeaderIdentityResolver::default();
        let handshake = Handshake::new().with_attribute(DEFAULT_IDENTITY_HEADER, "  ");

        // when (操作):
        let name = resolver.resolve(&handshake);

        // then (期待する結果):
        assert!(name.is_none());
    }

    #[test]
    fn test_anonymous_resolver_always_none() {
        // テスト項目: AnonymousIdentityResolver は常に None
        // given (前提条件):
        let handshake = Handshake::new().with_attribute(DEFAULT_IDENTITY_HEADER, "Alice");

        // when (操作):
        let name = AnonymousIdentityResolver.resolve(&handshake);

        // then (期待する結果):
        assert!(name.is_none());
    }
}
