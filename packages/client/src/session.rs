//! WebSocket client session management.

use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{
        self,
        client::IntoClientRequest,
        http::{HeaderName, HeaderValue},
        protocol::Message,
    },
};

use chatroom_server::infrastructure::{
    dto::websocket::{ChatEventDto, ChatTextDto},
    identity::DEFAULT_IDENTITY_HEADER,
};

use crate::{
    domain::SeenEvents,
    error::ClientError,
    formatter::MessageFormatter,
    ui::{prompt, redisplay_prompt},
};

/// Build the handshake request, carrying the display name in the identity header
fn build_request(
    url: &str,
    name: Option<&str>,
) -> Result<tungstenite::handshake::client::Request, ClientError> {
    let mut request = url
        .into_client_request()
        .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

    if let Some(name) = name {
        let value =
            HeaderValue::from_str(name).map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        request
            .headers_mut()
            .insert(HeaderName::from_static(DEFAULT_IDENTITY_HEADER), value);
    }

    Ok(request)
}

/// Classify a failed connection attempt
fn classify_connect_error(error: tungstenite::Error) -> ClientError {
    match error {
        tungstenite::Error::Http(response) => {
            ClientError::HandshakeRejected(response.status().as_u16())
        }
        other => ClientError::ConnectionError(other.to_string()),
    }
}

/// Forward typed lines to the WebSocket as `{"text": ..}` frames.
///
/// The receiver is only borrowed, so lines typed while the client is
/// reconnecting are delivered by the next session. Returns `Ok(())` once the
/// input is closed.
async fn forward_input<S>(
    input: &mut mpsc::UnboundedReceiver<String>,
    sink: &mut S,
) -> Result<(), ClientError>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    while let Some(line) = input.recv().await {
        let frame = ChatTextDto { text: line };
        let json = match serde_json::to_string(&frame) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize message: {}", e);
                continue;
            }
        };

        if let Err(e) = sink.send(Message::text(json)).await {
            tracing::warn!("Failed to send message: {}", e);
            return Err(ClientError::ConnectionError("Connection lost".to_string()));
        }
    }

    sink.close().await.ok();
    Ok(())
}

/// Run the WebSocket client session
///
/// Returns `Ok(())` when the user ends input, `Err` when the connection is lost
/// or could not be established.
pub async fn run_client_session(
    url: &str,
    name: Option<&str>,
    input: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let request = build_request(url, name)?;

    let (ws_stream, _response) = connect_async(request)
        .await
        .map_err(classify_connect_error)?;

    tracing::info!("Connected to chat server!");
    match name {
        Some(name) => println!(
            "\nYou are '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
            name
        ),
        None => println!(
            "\nYou joined as a guest. Type messages and press Enter to send. Press Ctrl+C to exit.\n"
        ),
    }

    let (mut write, mut read) = ws_stream.split();
    let prompt = prompt(name);

    // Spawn a task to handle incoming frames
    let mut read_task = tokio::spawn(async move {
        let mut seen = SeenEvents::new();
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<Vec<ChatEventDto>>(&text) {
                        Ok(events) => MessageFormatter::format_frame(&mut seen, events),
                        Err(e) => {
                            tracing::debug!("Failed to parse frame: {}", e);
                            Some(MessageFormatter::format_raw_message(&text))
                        }
                    };
                    if let Some(formatted) = formatted {
                        print!("{}", formatted);
                        redisplay_prompt(&prompt);
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // If either side completes, stop the other
    tokio::select! {
        read_result = &mut read_task => {
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
        write_result = forward_input(input, &mut write) => {
            read_task.abort();
            write_result?;
        }
    }

    Ok(())
}
