//! Response envelope decoding
//!
//! Every phpIPAM response is wrapped as `{code, success, data|message}`.
//! Decoding happens in two passes: the wrapper first, then `data` into the
//! caller's type, so a malformed body and a payload that does not fit the
//! output type are reported as different errors.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::TYPE_MISMATCH_PREFIX;
use crate::error::PhpIpamError;

/// Wire-level response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// HTTP-like status code reported by the API
    pub code: i64,
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload, absent on some mutating operations
    #[serde(default)]
    pub data: Option<Value>,
    /// Error description when `success` is false
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Parse the wrapper from a raw body.
    ///
    /// # Errors
    /// [`PhpIpamError::Protocol`] when the body is not an envelope.
    pub fn parse(status: u16, body: &[u8]) -> Result<Self, PhpIpamError> {
        serde_json::from_slice(body).map_err(|e| {
            PhpIpamError::Protocol(format!(
                "malformed response body (HTTP {status}): {e} - Response (first 500 chars): {}",
                String::from_utf8_lossy(body).chars().take(500).collect::<String>()
            ))
        })
    }

    /// Turn the wrapper into its payload, or the API error it reports.
    ///
    /// `Ok(None)` means success without a `data` field.
    ///
    /// # Errors
    /// [`PhpIpamError::Api`] for `success: false`; [`PhpIpamError::Decode`] or
    /// [`PhpIpamError::TypeMismatch`] when `data` does not fit `T`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<Option<T>, PhpIpamError> {
        if !self.success {
            return match self.message {
                Some(message) if !message.is_empty() => Err(PhpIpamError::Api {
                    code: self.code,
                    message,
                }),
                _ => Err(PhpIpamError::Protocol(format!(
                    "error envelope (code {}) without a message",
                    self.code
                ))),
            };
        }

        match self.data {
            None => Ok(None),
            Some(data) => serde_json::from_value(data).map(Some).map_err(data_error),
        }
    }
}

/// Decode a raw response into its typed payload.
///
/// # Errors
/// See [`Envelope::parse`] and [`Envelope::into_data`].
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<Option<T>, PhpIpamError> {
    Envelope::parse(status, body)?.into_data()
}

/// Decode a raw response into `out`.
///
/// `out` is left untouched when the envelope carries no `data`, and on error.
///
/// # Errors
/// See [`decode`].
pub fn decode_into<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
    out: &mut T,
) -> Result<(), PhpIpamError> {
    if let Some(value) = decode(status, body)? {
        *out = value;
    }
    Ok(())
}

fn data_error(err: serde_json::Error) -> PhpIpamError {
    let message = err.to_string();
    if message.starts_with(TYPE_MISMATCH_PREFIX) {
        PhpIpamError::TypeMismatch(message)
    } else {
        PhpIpamError::Decode(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{self, BoolIntString};

    #[derive(Debug, Default, Clone, PartialEq, Deserialize)]
    struct Item {
        #[serde(default, with = "codec::int_string")]
        id: u64,
        #[serde(default, deserialize_with = "codec::nullable_string")]
        name: String,
        #[serde(default, rename = "isFull")]
        is_full: BoolIntString,
    }

    #[test]
    fn error_envelope_formats_message() {
        let body = br#"{"code":404,"success":false,"message":"No subnets found"}"#;
        let err = decode::<Vec<Item>>(404, body).unwrap_err();
        assert_eq!(err.to_string(), "Error from API (404): No subnets found");
        assert_eq!(err.api_code(), Some(404));
    }

    #[test]
    fn error_envelope_short_circuits_data() {
        let body = br#"{"code":500,"success":false,"message":"boom","data":"not an item"}"#;
        let mut out = Item::default();
        let err = decode_into(500, body, &mut out).unwrap_err();
        assert!(matches!(err, PhpIpamError::Api { code: 500, .. }));
    }

    #[test]
    fn error_envelope_without_message_is_protocol_error() {
        let body = br#"{"code":500,"success":false}"#;
        let err = decode::<Item>(500, body).unwrap_err();
        assert!(matches!(err, PhpIpamError::Protocol(_)));
    }

    #[test]
    fn success_without_data_leaves_output_untouched() {
        let body = br#"{"code":200,"success":true}"#;
        let mut out = Item {
            id: 3,
            name: "keep".to_string(),
            is_full: BoolIntString(true),
        };
        let before = out.clone();
        decode_into(200, body, &mut out).unwrap();
        assert_eq!(out, before);
    }

    #[test]
    fn success_with_object_data() {
        let body = br#"{"code":200,"success":true,"data":{"id":"8","name":null,"isFull":"1","links":[{"rel":"self","href":"/api/test/subnets/8/"}]}}"#;
        let out: Item = decode(200, body).unwrap().unwrap();
        assert_eq!(
            out,
            Item {
                id: 8,
                name: String::new(),
                is_full: BoolIntString(true),
            }
        );
    }

    #[test]
    fn success_with_array_data() {
        let body = br#"{"code":200,"success":true,"data":[{"id":"1","name":"a"},{"id":"2","name":"b"}]}"#;
        let out: Vec<Item> = decode(200, body).unwrap().unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name, "b");
    }

    #[test]
    fn success_with_string_data() {
        let body = br#"{"code":201,"success":true,"data":"Subnet created"}"#;
        let out: String = decode(201, body).unwrap().unwrap();
        assert_eq!(out, "Subnet created");
    }

    #[test]
    fn shape_mismatch_is_decode_error() {
        let body = br#"{"code":200,"success":true,"data":{"id":"1"}}"#;
        let err = decode::<Vec<Item>>(200, body).unwrap_err();
        assert!(matches!(err, PhpIpamError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn bad_scalar_is_type_mismatch() {
        let body = br#"{"code":200,"success":true,"data":{"id":"1","isFull":"yes"}}"#;
        let err = decode::<Item>(200, body).unwrap_err();
        assert!(matches!(err, PhpIpamError::TypeMismatch(_)), "got {err:?}");
        assert!(err.to_string().contains("\"yes\""));
    }

    #[test]
    fn malformed_body_is_protocol_error() {
        let err = decode::<Item>(502, b"<html>Bad Gateway</html>").unwrap_err();
        match err {
            PhpIpamError::Protocol(msg) => {
                assert!(msg.contains("HTTP 502"));
                assert!(msg.contains("Bad Gateway"));
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }
}
