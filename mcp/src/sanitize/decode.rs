//! Best-effort decoding of file content into text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::constants::BASE64_ENCODING;

/// Why a payload could not be turned into text.
///
/// This never leaves the sanitizer: callers fall back to the encoded payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeFailure {
    #[error("unsupported content encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("decoded content is not UTF-8 text")]
    NotText,
}

/// Decode `content` according to its transport `encoding`.
///
/// An absent or empty encoding means the payload is already text. `base64`
/// payloads may contain the line breaks GitHub inserts every 60 characters.
/// Anything else, including `none` for files too large to inline, fails.
pub fn decode_content(content: &str, encoding: Option<&str>) -> Result<String, DecodeFailure> {
    match encoding {
        None | Some("") => Ok(content.to_string()),
        Some(BASE64_ENCODING) => {
            let compact: String = content
                .chars()
                .filter(|c| *c != '\n' && *c != '\r')
                .collect();
            let bytes = STANDARD
                .decode(compact)
                .map_err(|e| DecodeFailure::InvalidBase64(e.to_string()))?;
            String::from_utf8(bytes).map_err(|_| DecodeFailure::NotText)
        },
        Some(other) => Err(DecodeFailure::UnsupportedEncoding(other.to_string())),
    }
}
