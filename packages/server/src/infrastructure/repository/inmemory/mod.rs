//! インメモリ実装
//!
//! プロセスの生存期間だけ保持され、永続化はされません。

pub mod history;
pub mod session;

pub use history::{DEFAULT_HISTORY_CAPACITY, InMemoryChatHistory};
pub use session::InMemorySessionRepository;
