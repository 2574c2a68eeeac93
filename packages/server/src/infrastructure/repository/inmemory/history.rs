//! InMemory チャット履歴
//!
//! 容量制限付きの追記のみのログです。`RwLock` により、読み取り（スナップショット）は
//! 並行に、書き込み（追記）は排他的に行われます。

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ChatEvent, ChatHistoryRepository};

/// 履歴の既定の最大件数
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// インメモリのチャット履歴
pub struct InMemoryChatHistory {
    events: RwLock<VecDeque<ChatEvent>>,
    capacity: usize,
}

impl InMemoryChatHistory {
    /// 指定した容量で作成
    ///
    /// # Panics
    ///
    /// `capacity == 0` の場合
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be > 0");
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
        }
    }
}

impl Default for InMemoryChatHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistory {
    async fn append(&self, event: ChatEvent) {
        let mut events = self.events.write().await;
        events.push_back(event);
        if events.len() > self.capacity {
            events.pop_front();
        }
        debug_assert!(events.len() <= self.capacity);
    }

    async fn snapshot(&self) -> Vec<ChatEvent> {
        let events = self.events.read().await;
        events.iter().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
