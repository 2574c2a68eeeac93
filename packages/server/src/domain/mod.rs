//! Domain layer.
//!
//! 値オブジェクト・エンティティと、他の層が実装するインターフェース（trait）を定義します。

pub mod codec;
pub mod entity;
pub mod error;
pub mod factory;
pub mod identity;
pub mod pusher;
pub mod repository;
pub mod value_object;

pub use codec::EventCodec;
pub use entity::{ChatEvent, Session};
pub use error::{DecodeError, EncodeError, SendError, ValueObjectError};
pub use factory::{GuestNameFactory, SessionIdFactory};
pub use identity::{Handshake, IdentityResolver};
pub use pusher::{BroadcastReport, FrameSink, MessagePusher};
#[cfg(test)]
pub use pusher::MockFrameSink;
pub use repository::{ChatHistoryRepository, SessionRepository};
pub use value_object::{DisplayName, MessageText, SessionId, Timestamp};
