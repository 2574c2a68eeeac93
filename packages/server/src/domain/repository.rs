//! Repository trait 定義
//!
//! ドメイン層が必要とする共有状態へのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! どちらもインメモリの構造で I/O を伴わないため、操作は失敗しません。

use async_trait::async_trait;

use super::{ChatEvent, Session, SessionId};

/// チャット履歴（容量制限付き・追記のみ）
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// 最新のイベントとして追加。容量を超えた場合は最古のイベントを 1 件削除する
    async fn append(&self, event: ChatEvent);

    /// 現在の履歴のコピー（古い順）
    async fn snapshot(&self) -> Vec<ChatEvent>;

    /// 現在の件数
    async fn len(&self) -> usize;

    /// 最大件数
    fn capacity(&self) -> usize;
}

/// 接続中セッションのレジストリ
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 登録（同じ ID が既にあれば置き換える）
    async fn register(&self, session: Session);

    /// 登録解除。存在しない場合は何もしない。削除したセッションを返す
    async fn unregister(&self, session_id: &SessionId) -> Option<Session>;

    /// ID でセッションを取得
    async fn get(&self, session_id: &SessionId) -> Option<Session>;

    /// 登録中の全セッションのスナップショット（順序は不定）
    async fn all_sessions(&self) -> Vec<Session>;

    /// 登録中のセッション数
    async fn count(&self) -> usize;
}
