//! Terminal chat client.
//!
//! Connects to the chatroom server, prints the room history and every
//! broadcast, and sends each line typed at the prompt as a chat message.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatroom-client -- --name Alice
//! cargo run --bin chatroom-client
//! ```

use clap::Parser;

use chatroom_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "chatroom-client")]
#[command(about = "Terminal client for the chatroom server", long_about = None)]
struct Args {
    /// Display name; the server assigns a guest name when omitted
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = chatroom_client::run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
