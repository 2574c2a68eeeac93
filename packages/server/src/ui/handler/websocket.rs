//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade},
    },
    http::HeaderMap,
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{Handshake, SessionIdFactory},
    infrastructure::message_pusher::ChannelFrameSink,
    ui::state::AppState,
    usecase::SendMessageError,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let handshake = handshake_from_headers(&headers);
    ws.on_upgrade(move |socket| handle_socket(socket, state, handshake))
}

/// Copy the upgrade request's headers into the handshake context.
fn handshake_from_headers(headers: &HeaderMap) -> Handshake {
    let mut handshake = Handshake::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            handshake.insert(name.as_str(), value);
        }
    }
    handshake
}

/// Describe why the client side of a connection ended, for the disconnect log.
fn describe_close(frame: Option<&CloseFrame>) -> String {
    match frame {
        Some(frame) if frame.reason.as_str().is_empty() => {
            format!("client sent close frame (code {})", frame.code)
        }
        Some(frame) => format!(
            "client sent close frame (code {}, reason '{}')",
            frame.code,
            frame.reason.as_str()
        ),
        None => "client sent close frame without status".to_string(),
    }
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This is the only writer of the socket, so a slow connection stalls only this task.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(frame.into())).await {
                tracing::debug!("WebSocket write failed: {}", e);
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, handshake: Handshake) {
    let (sender, mut receiver) = socket.split();

    // Outbound frames go through this connection's channel
    let (tx, rx) = mpsc::unbounded_channel();
    let mut send_task = pusher_loop(rx, sender);

    // CONNECTING -> OPEN
    let session = match state
        .connect_participant_usecase
        .execute(
            SessionIdFactory::generate(),
            &handshake,
            Arc::new(ChannelFrameSink::new(tx)),
        )
        .await
    {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Connection closed during join: {}", e);
            send_task.abort();
            return;
        }
    };

    let session_id = session.id.clone();
    let display_name = session.display_name.clone();
    let state_clone = state.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on session '{}': {}", session_id, e);
                    return format!("read error: {}", e);
                }
            };

            match msg {
                Message::Text(text) => {
                    match state_clone
                        .send_message_usecase
                        .execute(&session_id, text.as_str())
                        .await
                    {
                        Ok(event) => {
                            tracing::debug!("Broadcasted message from '{}'", event.name());
                        }
                        Err(SendMessageError::EmptyMessage) => {
                            tracing::debug!("Ignored empty message from '{}'", session_id);
                        }
                        Err(e) => {
                            tracing::warn!("Dropped frame from '{}': {}", session_id, e);
                        }
                    }
                }
                Message::Binary(data) => {
                    tracing::warn!(
                        "Dropped binary frame ({} bytes) from '{}'",
                        data.len(),
                        session_id
                    );
                }
                Message::Close(frame) => return describe_close(frame.as_ref()),
                // Ping/pong is handled automatically by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
        "stream ended without close frame".to_string()
    });

    // If any one of the tasks completes, abort the other
    let cause = tokio::select! {
        recv_result = &mut recv_task => {
            send_task.abort();
            recv_result.unwrap_or_else(|e| format!("receiver task failed: {}", e))
        }
        _ = &mut send_task => {
            recv_task.abort();
            "write to client failed".to_string()
        }
    };

    // OPEN -> CLOSED
    state
        .disconnect_participant_usecase
        .execute(&session.id)
        .await;
    let remaining = state
        .disconnect_participant_usecase
        .count_remaining_participants()
        .await;
    tracing::info!(
        "Connection of '{}' closed: {} ({} participant(s) remaining)",
        display_name,
        cause,
        remaining
    );
}

#[cfg(test)]
mod tests {
    use axum::{extract::ws::Utf8Bytes, http::HeaderValue};

    use super::*;

    #[test]
    fn test_describe_close_with_code_and_reason() {
        // テスト項目: クローズフレームのコードと理由が切断ログに含まれる
        // given (前提条件):
        let frame = CloseFrame {
            code: 1001,
            reason: Utf8Bytes::from_static("going away"),
        };

        // when (操作):
        let cause = describe_close(Some(&frame));

        // then (期待する結果):
        assert_eq!(
            cause,
            "client sent close frame (code 1001, reason 'going away')"
        );
    }

    #[test]
    fn test_describe_close_without_reason() {
        // テスト項目: 理由が空の場合はコードのみ、フレームが無い場合はその旨を記録する
        // given (前提条件):
        let frame = CloseFrame {
            code: 1000,
            reason: Utf8Bytes::from_static(""),
        };

        // when (操作):
        let with_code = describe_close(Some(&frame));
        let without_frame = describe_close(None);

        // then (期待する結果):
        assert_eq!(with_code, "client sent close frame (code 1000)");
        assert_eq!(without_frame, "client sent close frame without status");
    }

    #[test]
    fn test_handshake_from_headers_copies_text_headers() {
        // テスト項目: リクエストヘッダーがハンドシェイク属性にコピーされる
        // given (前提条件):
        let mut headers = HeaderMap::new();
        headers.insert("x-authenticated-user", HeaderValue::from_static("Alice"));
        headers.insert(
            "x-binary",
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );

        // when (操作):
        let handshake = handshake_from_headers(&headers);

        // then (期待する結果):
        assert_eq!(handshake.attribute("X-Authenticated-User"), Some("Alice"));
        assert_eq!(handshake.attribute("x-binary"), None);
    }
}
