//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 表示名の解決、レジストリへの登録、履歴の送信、参加通知のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 新しい接続には履歴が 1 回だけ、参加通知が 1 回だけ届く必要がある
//! - ゲスト名は全接続で一意でなければならない
//! - 新しい接続への送信に失敗した場合、レジストリに残ってはいけない
//!
//! ### どのような状況を想定しているか
//! - 正常系：認証済みの名前での接続、ゲストとしての接続
//! - 正常系：既存の参加者への参加通知
//! - 異常系：新しい接続への送信失敗

use std::sync::Arc;

use chatroom_shared::time::Clock;

use crate::domain::{
    ChatEvent, ChatHistoryRepository, EventCodec, FrameSink, GuestNameFactory, Handshake,
    IdentityResolver, MessagePusher, Session, SessionId, SessionRepository, Timestamp,
};

use super::error::ConnectError;

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// セッションレジストリ
    sessions: Arc<dyn SessionRepository>,
    /// チャット履歴
    history: Arc<dyn ChatHistoryRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    codec: Arc<dyn EventCodec>,
    identity_resolver: Arc<dyn IdentityResolver>,
    /// プロセス全体で共有するゲスト名カウンタ
    guest_names: Arc<GuestNameFactory>,
    clock: Arc<dyn Clock>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        history: Arc<dyn ChatHistoryRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        codec: Arc<dyn EventCodec>,
        identity_resolver: Arc<dyn IdentityResolver>,
        guest_names: Arc<GuestNameFactory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            history,
            message_pusher,
            codec,
            identity_resolver,
            guest_names,
            clock,
        }
    }

    /// 参加者接続を実行
    ///
    /// 1. 表示名を解決（認証済みの名前、なければ `Guest<N>`）
    /// 2. レジストリに登録
    /// 3. 現在の履歴をこの接続にだけ送信
    /// 4. 参加通知を履歴に追加し、全セッション（新しい接続を含む）にブロードキャスト
    ///
    /// # Arguments
    ///
    /// * `session_id` - トランスポート層が割り当てたセッション ID
    /// * `handshake` - ハンドシェイク時のコンテキスト
    /// * `sink` - この接続へのフレーム送信手段
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - 登録されたセッション
    /// * `Err(ConnectError)` - 新しい接続への送信に失敗（セッションは登録解除済み）
    pub async fn execute(
        &self,
        session_id: SessionId,
        handshake: &Handshake,
        sink: Arc<dyn FrameSink>,
    ) -> Result<Session, ConnectError> {
        // 1. 表示名の解決
        let display_name = match self.identity_resolver.resolve(handshake) {
            Some(name) => name,
            None => self.guest_names.next_name(),
        };
        let session = Session::new(
            session_id,
            display_name,
            Timestamp::new(self.clock.now_millis()),
            sink,
        );

        // 2. レジストリに登録
        self.sessions.register(session.clone()).await;
        tracing::info!(
            "Session '{}' registered as '{}'",
            session.id,
            session.display_name
        );

        match self.greet(&session).await {
            Ok(()) => Ok(session),
            Err(e) => {
                self.sessions.unregister(&session.id).await;
                Err(e)
            }
        }
    }

    /// 履歴の送信と参加通知（手順 3, 4）
    async fn greet(&self, session: &Session) -> Result<(), ConnectError> {
        // 3. 履歴をこの接続にだけ送信
        // 登録からスナップショット取得までの間に他の参加者のブロードキャストが届くと、
        // そのイベントは履歴フレームより先に届き、スナップショットにも含まれ得る。
        // この順序の揺れは許容し、クライアント側で重複を取り除く。
        let history = self.history.snapshot().await;
        let history_frame = self.codec.encode_events(&history)?;
        self.message_pusher
            .push_to(session, &history_frame)
            .await
            .map_err(ConnectError::HistoryDeliveryFailed)?;
        tracing::debug!(
            "Sent {}/{} history event(s) to '{}'",
            history.len(),
            self.history.capacity(),
            session.display_name
        );

        // 4. 参加通知
        let joined = ChatEvent::joined(
            &session.display_name,
            Timestamp::new(self.clock.now_millis()),
        );
        let joined_frame = self.codec.encode_events(std::slice::from_ref(&joined))?;
        self.history.append(joined).await;

        let report = self.message_pusher.broadcast(&joined_frame).await;
        if report.failed_for(&session.id) {
            return Err(ConnectError::JoinDeliveryFailed);
        }
        tracing::info!("Broadcasted join of '{}'", session.display_name);

        Ok(())
    }
}
