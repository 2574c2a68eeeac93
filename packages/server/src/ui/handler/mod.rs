//! HTTP and WebSocket handlers.

mod http;
mod websocket;

pub use http::{get_history, health_check, list_sessions};
pub use websocket::websocket_handler;
