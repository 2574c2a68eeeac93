//! UseCase テスト用の共通部品

use std::sync::{Arc, Mutex};

use chatroom_shared::time::FixedClock;

use crate::{
    domain::{
        ChatHistoryRepository, FrameSink, GuestNameFactory, IdentityResolver, MessagePusher,
        SendError, SessionRepository,
    },
    infrastructure::{
        codec::JsonEventCodec,
        identity::HeaderIdentityResolver,
        message_pusher::RegistryMessagePusher,
        repository::{InMemoryChatHistory, InMemorySessionRepository},
    },
};

pub const FIXED_NOW: i64 = 1_700_000_000_000;

/// 送信されたフレームを記録する FrameSink
#[derive(Default)]
pub struct RecordingSink {
    frames: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }
}

impl FrameSink for RecordingSink {
    fn send(&self, frame: &str) -> Result<(), SendError> {
        self.frames.lock().unwrap().push(frame.to_string());
        Ok(())
    }
}

/// UseCase が依存する共有オブジェクト一式
pub struct TestRoom {
    pub sessions: Arc<InMemorySessionRepository>,
    pub history: Arc<InMemoryChatHistory>,
    pub pusher: Arc<RegistryMessagePusher>,
    pub codec: Arc<JsonEventCodec>,
    pub identity: Arc<HeaderIdentityResolver>,
    pub guest_names: Arc<GuestNameFactory>,
    pub clock: Arc<FixedClock>,
}

impl TestRoom {
    pub fn new() -> Self {
        let sessions = Arc::new(InMemorySessionRepository::new());
        let pusher = Arc::new(RegistryMessagePusher::new(sessions.clone()));
        Self {
            sessions,
            history: Arc::new(InMemoryChatHistory::default()),
            pusher,
            codec: Arc::new(JsonEventCodec::new()),
            identity: Arc::new(HeaderIdentityResolver::default()),
            guest_names: Arc::new(GuestNameFactory::new()),
            clock: Arc::new(FixedClock::new(FIXED_NOW)),
        }
    }

    pub fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.sessions.clone()
    }

    pub fn history(&self) -> Arc<dyn ChatHistoryRepository> {
        self.history.clone()
    }

    pub fn pusher(&self) -> Arc<dyn MessagePusher> {
        self.pusher.clone()
    }

    pub fn identity(&self) -> Arc<dyn IdentityResolver> {
        self.identity.clone()
    }
}
