//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::{http::SessionSummaryDto, websocket::ChatEventDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current chat history, in the same shape as the WebSocket history frame
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<ChatEventDto>> {
    let events = state.get_chat_history_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(events.iter().map(ChatEventDto::from).collect())
}

/// Currently connected sessions
pub async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<SessionSummaryDto>> {
    let sessions = state.list_sessions_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(sessions.iter().map(SessionSummaryDto::from).collect())
}
