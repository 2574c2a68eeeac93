//! Repository implementations.

pub mod inmemory;

pub use inmemory::{DEFAULT_HISTORY_CAPACITY, InMemoryChatHistory, InMemorySessionRepository};
