//! ID・名前の生成

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use super::value_object::{DisplayName, SessionId};

/// セッション ID の生成
pub struct SessionIdFactory;

impl SessionIdFactory {
    pub fn generate() -> SessionId {
        SessionId(Uuid::new_v4().to_string())
    }
}

/// ゲスト名（`Guest<N>`）の生成
///
/// カウンタはプロセス全体の全接続で共有され、単調増加します。
/// 最初に生成される名前は `Guest1` です。
#[derive(Debug, Default)]
pub struct GuestNameFactory {
    counter: AtomicU64,
}

impl GuestNameFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&self) -> DisplayName {
        let number = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        DisplayName(format!("Guest{}", number))
    }
}
