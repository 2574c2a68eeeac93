//! Chat room server library.
//!
//! Real-time chat over WebSocket: a session registry, a bounded shared
//! history buffer and a broadcast fan-out protocol.

pub mod app;

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
