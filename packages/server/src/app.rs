//! Dependency wiring.
//!
//! Builds the shared objects (registry, history, guest counter) once and injects
//! them into every use case.

use std::sync::Arc;

use chatroom_shared::time::SystemClock;

use crate::{
    domain::{ChatHistoryRepository, GuestNameFactory, IdentityResolver},
    infrastructure::{
        codec::JsonEventCodec,
        identity::{AnonymousIdentityResolver, DEFAULT_IDENTITY_HEADER, HeaderIdentityResolver},
        message_pusher::RegistryMessagePusher,
        repository::{DEFAULT_HISTORY_CAPACITY, InMemoryChatHistory, InMemorySessionRepository},
    },
    ui::Server,
    usecase::{
        ConnectParticipantUseCase, DisconnectParticipantUseCase, GetChatHistoryUseCase,
        ListSessionsUseCase, SendMessageUseCase,
    },
};

/// Runtime configuration of the chat room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum number of events kept in the shared history
    pub history_capacity: usize,
    /// Handshake header carrying the authenticated user name.
    /// `None` treats every participant as a guest.
    pub identity_header: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            identity_header: Some(DEFAULT_IDENTITY_HEADER.to_string()),
        }
    }
}

fn build_identity_resolver(config: &AppConfig) -> Arc<dyn IdentityResolver> {
    match &config.identity_header {
        Some(header) => {
            let resolver = HeaderIdentityResolver::new(header.clone());
            tracing::info!("Display names are read from the '{}' header", resolver.attribute());
            Arc::new(resolver)
        }
        None => {
            tracing::info!("Identity header disabled, every participant joins as a guest");
            Arc::new(AnonymousIdentityResolver)
        }
    }
}

/// Wire every layer together and return a ready-to-run server.
///
/// Initialization order:
/// 1. Registry and history (in-memory)
/// 2. MessagePusher, codec, identity resolver, guest counter
/// 3. UseCases
/// 4. Server
pub fn build_server(config: &AppConfig) -> Server {
    // 1. Shared state
    let sessions = Arc::new(InMemorySessionRepository::new());
    let history = Arc::new(InMemoryChatHistory::new(config.history_capacity));
    tracing::info!("Chat history created (capacity {})", history.capacity());

    // 2. Collaborators
    let message_pusher = Arc::new(RegistryMessagePusher::new(sessions.clone()));
    let codec = Arc::new(JsonEventCodec::new());
    let identity_resolver = build_identity_resolver(config);
    let guest_names = Arc::new(GuestNameFactory::new());
    let clock = Arc::new(SystemClock);

    // 3. UseCases
    let connect_participant_usecase = Arc::new(ConnectParticipantUseCase::new(
        sessions.clone(),
        history.clone(),
        message_pusher.clone(),
        codec.clone(),
        identity_resolver,
        guest_names,
        clock.clone(),
    ));
    let disconnect_participant_usecase =
        Arc::new(DisconnectParticipantUseCase::new(sessions.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        sessions.clone(),
        history.clone(),
        message_pusher,
        codec,
        clock,
    ));
    let get_chat_history_usecase = Arc::new(GetChatHistoryUseCase::new(history));
    let list_sessions_usecase = Arc::new(ListSessionsUseCase::new(sessions));

    // 4. Server
    Server::new(
        connect_participant_usecase,
        disconnect_participant_usecase,
        send_message_usecase,
        get_chat_history_usecase,
        list_sessions_usecase,
    )
}
