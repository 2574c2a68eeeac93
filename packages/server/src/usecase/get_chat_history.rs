//! UseCase: チャット履歴の取得

use std::sync::Arc;

use crate::domain::{ChatEvent, ChatHistoryRepository};

/// チャット履歴取得のユースケース
pub struct GetChatHistoryUseCase {
    history: Arc<dyn ChatHistoryRepository>,
}

impl GetChatHistoryUseCase {
    pub fn new(history: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { history }
    }

    /// 現在の履歴（古い順）
    pub async fn execute(&self) -> Vec<ChatEvent> {
        self.history.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DisplayName, MessageText, Timestamp},
        usecase::testing::TestRoom,
    };

    #[tokio::test]
    async fn test_get_chat_history_returns_snapshot() {
        // テスト項目: 履歴のスナップショットが古い順に返される
        // given (前提条件):
        let room = TestRoom::new();
        let usecase = GetChatHistoryUseCase::new(room.history());
        for n in 0..3 {
            room.history
                .append(ChatEvent::new(
                    DisplayName::new("alice".to_string()).unwrap(),
                    MessageText::new(format!("m{}", n)).unwrap(),
                    Timestamp::new(n),
                ))
                .await;
        }

        // when (操作):
        let history = usecase.execute().await;

        // then (期待する結果):
        let texts: Vec<&str> = history.iter().map(|e| e.text().as_str()).collect();
        assert_eq!(texts, vec!["m0", "m1", "m2"]);
    }
}
