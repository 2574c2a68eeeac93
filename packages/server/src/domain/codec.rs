//! ワイヤーフォーマットのインターフェース

use super::{
    entity::ChatEvent,
    error::{DecodeError, EncodeError},
};

/// イベント列のエンコードと受信フレームのデコード
pub trait EventCodec: Send + Sync {
    /// イベント列を 1 つの送信フレームにエンコード（単一イベントも要素 1 の列として扱う）
    fn encode_events(&self, events: &[ChatEvent]) -> Result<String, EncodeError>;

    /// 受信フレームから本文を取り出す
    fn decode_text(&self, frame: &str) -> Result<String, DecodeError>;
}
