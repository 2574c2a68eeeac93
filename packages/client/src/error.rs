//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered the WebSocket handshake with an HTTP error
    #[error("Server rejected the connection with HTTP status {0}")]
    HandshakeRejected(u16),

    /// The handshake request could not be built from the given options
    #[error("Invalid connection request: {0}")]
    InvalidRequest(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
}
