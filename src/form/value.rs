// src/form/value.rs

use crate::error::{AppError, AppResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::NaiveDateTime;

/// An embedded image payload, carried as a base64 data URI the way the
/// capture surfaces hand it over (`data:image/jpeg;base64,...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub mime: String,
    pub base64: String,
}

impl ImageData {
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            base64: BASE64.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> AppResult<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or(AppError::InvalidImagePayload)?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or(AppError::InvalidImagePayload)?;
        if mime.is_empty() || payload.is_empty() {
            return Err(AppError::InvalidImagePayload);
        }

        Ok(Self {
            mime: mime.to_string(),
            base64: payload.to_string(),
        })
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }

    pub fn decode(&self) -> AppResult<Vec<u8>> {
        BASE64
            .decode(self.base64.as_bytes())
            .map_err(|e| AppError::ImageDecode(e.to_string()))
    }
}

/// Tagged union over everything a form field can hold.
///
/// The formatter dispatches exhaustively on this instead of inspecting
/// runtime shapes; classification of date-like and image-bearing fields
/// stays key-name-driven for compatibility with the report contract.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Missing,
    Text(String),
    Flag(bool),
    Moment(NaiveDateTime),
    Image(ImageData),
    Group(Vec<(&'static str, FieldValue)>),
    List(Vec<FieldValue>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::Moment(dt)
    }
}

impl From<ImageData> for FieldValue {
    fn from(img: ImageData) -> Self {
        FieldValue::Image(img)
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_round_trips() {
        let img = ImageData::from_bytes("image/png", b"\x89PNG\r\n");
        let uri = img.data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));

        let parsed = ImageData::from_data_uri(&uri).expect("parse data uri");
        assert_eq!(parsed, img);
        assert_eq!(parsed.decode().expect("decode"), b"\x89PNG\r\n");
    }

    #[test]
    fn from_data_uri_rejects_malformed_inputs() {
        assert!(ImageData::from_data_uri("image/png;base64,AAAA").is_err());
        assert!(ImageData::from_data_uri("data:image/png,AAAA").is_err());
        assert!(ImageData::from_data_uri("data:;base64,AAAA").is_err());
        assert!(ImageData::from_data_uri("data:image/png;base64,").is_err());
    }

    #[test]
    fn decode_rejects_non_base64_payload() {
        let img = ImageData {
            mime: "image/png".to_string(),
            base64: "not base64!!".to_string(),
        };
        assert!(matches!(img.decode(), Err(AppError::ImageDecode(_))));
    }
}
