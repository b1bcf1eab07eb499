//! ユーティリティモジュール

pub mod cache;
pub mod log_trace;
pub mod omdb;

use base64::Engine;

// 共通ヘルパー

/// Base64エンコード
pub fn encode_base64(data: &str) -> Option<String> {
    Some(base64::engine::general_purpose::STANDARD.encode(data.as_bytes()))
}

/// Base64デコード
pub fn decode_base64(data: &str) -> Option<String> {
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}

/// ID一覧を共有ハッシュ用に符号化（JSON配列→Base64）
pub fn encode_id_list(ids: &[String]) -> Option<String> {
    let json = serde_json::to_string(ids).ok()?;
    encode_base64(&json)
}

/// 共有ハッシュのID一覧を復号
pub fn decode_id_list(encoded: &str) -> Option<Vec<String>> {
    let json = decode_base64(encoded)?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trip() {
        let original = "映画ウォッチリスト";
        let encoded = encode_base64(original).unwrap();
        assert_eq!(decode_base64(&encoded).unwrap(), original);
    }

    #[test]
    fn id_list_round_trip() {
        let ids = vec!["tt0111161".to_string(), "tt0068646".to_string()];
        let encoded = encode_id_list(&ids).unwrap();
        assert_eq!(decode_id_list(&encoded).unwrap(), ids);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_id_list("###").is_none());
        assert!(decode_id_list(&encode_base64("not a list").unwrap()).is_none());
    }
}
