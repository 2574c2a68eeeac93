//! WebSocket chat room server.
//!
//! New connections receive the recent history, then every message is broadcast
//! to all connected participants.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatroom-server
//! cargo run --bin chatroom-server -- --host 0.0.0.0 --port 3000 --history-capacity 200
//! ```

use chatroom_server::app::{AppConfig, build_server};
use chatroom_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatroom-server")]
#[command(about = "WebSocket chat room server with shared history and broadcast", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Maximum number of chat events kept in memory and sent to new participants
    #[arg(
        long,
        default_value = "100",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    history_capacity: usize,

    /// Request header set by a trusted proxy with the authenticated user name
    #[arg(long, default_value = "x-authenticated-user")]
    identity_header: String,

    /// Ignore the identity header and name every participant as a guest
    #[arg(long)]
    anonymous: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

fn app_config(args: &Args) -> AppConfig {
    AppConfig {
        history_capacity: args.history_capacity,
        identity_header: (!args.anonymous).then(|| args.identity_header.clone()),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = app_config(&args);
    let server = build_server(&config);

    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
