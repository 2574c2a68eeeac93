//! JSON による EventCodec 実装

use crate::{
    domain::{ChatEvent, DecodeError, EncodeError, EventCodec},
    infrastructure::dto::websocket::{ChatEventDto, ChatTextDto},
};

/// JSON コーデック
///
/// 送信フレームは常に配列（単一イベントでも要素 1 の配列）、受信フレームは
/// `text` フィールドのみを持つオブジェクトです。
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEventCodec;

impl JsonEventCodec {
    pub fn new() -> Self {
        Self
    }
}

impl EventCodec for JsonEventCodec {
    fn encode_events(&self, events: &[ChatEvent]) -> Result<String, EncodeError> {
        let dtos: Vec<ChatEventDto> = events.iter().map(ChatEventDto::from).collect();
        serde_json::to_string(&dtos).map_err(|e| EncodeError::Serialize(e.to_string()))
    }

    fn decode_text(&self, frame: &str) -> Result<String, DecodeError> {
        serde_json::from_str::<ChatTextDto>(frame)
            .map(|dto| dto.text)
            .map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}
