//! Logging setup utilities for the chatroom binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default directive enables `default_log_level` for the binary itself and
/// for every chatroom library crate. `RUST_LOG` overrides it entirely.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "chatroom-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use chatroom_shared::logger::setup_logger;
///
/// setup_logger("chatroom-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the `EnvFilter` directive used when `RUST_LOG` is not set.
fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets = vec![binary_target];
    for library in ["chatroom_server", "chatroom_client", "chatroom_shared"] {
        if !targets.iter().any(|t| t == library) {
            targets.push(library.to_string());
        }
    }
    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_binary_and_libraries() {
        // テスト項目: バイナリ名とライブラリ crate がディレクティブに含まれる
        // given (前提条件):
        let binary_name = "chatroom-server";

        // when (操作):
        let directive = default_directive(binary_name, "info");

        // then (期待する結果):
        assert_eq!(
            directive,
            "chatroom_server=info,chatroom_client=info,chatroom_shared=info"
        );
    }

    #[test]
    fn test_default_directive_with_custom_binary_name() {
        // テスト項目: chatroom 以外のバイナリ名も先頭に追加される
        // given (前提条件):
        let binary_name = "load-tester";

        // when (操作):
        let directive = default_directive(binary_name, "warn");

        // then (期待する結果):
        assert!(directive.starts_with("load_tester=warn,"));
        assert!(directive.contains("chatroom_server=warn"));
    }
}
