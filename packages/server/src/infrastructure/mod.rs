//! Infrastructure layer.
//!
//! ドメイン層が定義する trait の具体的な実装（インメモリの共有状態、JSON コーデック、
//! WebSocket 向けの送信チャンネル、ID 解決）と DTO を提供します。

pub mod codec;
pub mod dto;
pub mod identity;
pub mod message_pusher;
pub mod repository;
