//! Base64 framing of host payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cqp_pack::record::{self, Record};
use cqp_pack::WireFormat;

use crate::ApiError;

/// Decodes the base64 text the host hands out. Empty text means the host had
/// nothing to return.
pub fn decode_text(text: &str) -> Result<Vec<u8>, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::Empty);
    }
    Ok(STANDARD.decode(text)?)
}

/// Base64-encodes a payload for the host.
pub fn encode_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes one record from host text.
pub fn decode_record<T: Record>(text: &str, format: WireFormat) -> Result<T, ApiError> {
    let bytes = decode_text(text)?;
    Ok(record::decode(&bytes, format)?)
}

/// Decodes a counted record list from host text.
pub fn decode_record_list<T: Record>(text: &str, format: WireFormat) -> Result<Vec<T>, ApiError> {
    let bytes = decode_text(text)?;
    Ok(record::decode_list(&bytes, format)?)
}

/// Encodes one record as host text.
pub fn encode_record<T: Record>(value: &T, format: WireFormat) -> String {
    encode_text(&record::encode(value, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cqp_pack::model::StrangerInfo;

    #[test]
    fn test_empty_text() {
        assert!(matches!(decode_text(""), Err(ApiError::Empty)));
        assert!(matches!(decode_text("  \n"), Err(ApiError::Empty)));
    }

    #[test]
    fn test_bad_base64() {
        assert!(matches!(decode_text("!!!"), Err(ApiError::Base64(_))));
    }

    #[test]
    fn test_stranger_sample() {
        let info: StrangerInfo =
            decode_record("AAAAAAdbzRUAAAAE0KHD9wAAAAEAAAAU", WireFormat::default()).unwrap();
        assert_eq!(info.id, 123_456_789);
        assert_eq!(info.nickname, "小明");
        assert_eq!(info.age, 20);
    }
}
