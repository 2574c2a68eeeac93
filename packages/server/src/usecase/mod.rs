//! UseCase layer.
//!
//! 接続のライフサイクル（接続・メッセージ受信・切断）と、HTTP API 向けの参照系を扱います。
//!
//! ```text
//! CONNECTING --connect--> OPEN --message--> OPEN
//!                          |
//!                          +----disconnect--> CLOSED
//! ```

mod connect_participant;
mod disconnect_participant;
mod error;
mod get_chat_history;
mod list_sessions;
mod send_message;

#[cfg(test)]
mod testing;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{ConnectError, SendMessageError};
pub use get_chat_history::GetChatHistoryUseCase;
pub use list_sessions::ListSessionsUseCase;
pub use send_message::SendMessageUseCase;
