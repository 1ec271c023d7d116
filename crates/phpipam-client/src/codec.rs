//! Scalar codec for phpIPAM wire values
//!
//! phpIPAM returns integers, booleans and identifiers as JSON strings (or
//! `null`), and expects them back in the same shape. The adapters in this
//! module convert between that representation and native values. Resource
//! records opt in per field, so the wire contract stays visible on the type.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Leading text of every [`TypeMismatch`] message.
pub const TYPE_MISMATCH_PREFIX: &str = "type mismatch";

const BOOLEAN: &str = "\"0\" or \"1\"";
const INTEGER: &str = "an integer string";

/// A wire scalar that cannot be read under the expected encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type mismatch: expected {expected}, got {raw}")]
pub struct TypeMismatch {
    /// Encoding the codec expected
    pub expected: &'static str,
    /// Offending token, as JSON text
    pub raw: String,
}

impl TypeMismatch {
    fn new(expected: &'static str, raw: &Value) -> Self {
        Self {
            expected,
            raw: raw.to_string(),
        }
    }
}

/// Decode a boolean from its wire token: `"1"` is true, `"0"` is false.
///
/// # Errors
/// Any other token yields a [`TypeMismatch`] carrying it.
pub fn parse_bool(raw: &str) -> Result<bool, TypeMismatch> {
    match raw {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(TypeMismatch::new(BOOLEAN, &Value::from(other))),
    }
}

/// Wire token for a boolean.
#[must_use]
pub const fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Decode an integer from a digit string. The empty string is zero.
///
/// # Errors
/// Returns a [`TypeMismatch`] when the string is not a valid integer of `T`.
pub fn parse_int<T: FromStr + Default>(raw: &str) -> Result<T, TypeMismatch> {
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse()
        .map_err(|_| TypeMismatch::new(INTEGER, &Value::from(raw)))
}

/// `skip_serializing_if` predicate: omit zero, false and empty values.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Reads JSON `null` as an empty string.
///
/// # Errors
/// Fails when the value is neither a string nor `null`.
pub fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer carried as a quoted decimal string.
///
/// Use with `#[serde(default, with = "crate::codec::int_string")]`. `null`,
/// `""` and absent fields decode to zero; bare JSON numbers are accepted too.
pub mod int_string {
    use super::{INTEGER, TypeMismatch, Value, parse_int};
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    /// Encode as a quoted string.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Decode from a digit string, number or `null`.
    ///
    /// # Errors
    /// Fails with a type mismatch message for any other token.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr + Default,
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(T::default()),
            Some(Value::String(s)) => parse_int(&s).map_err(de::Error::custom),
            Some(Value::Number(n)) => parse_int(&n.to_string()).map_err(de::Error::custom),
            Some(other) => Err(de::Error::custom(TypeMismatch::new(INTEGER, &other))),
        }
    }
}

/// Boolean carried as `"1"` / `"0"` on the wire.
///
/// Native JSON booleans are rejected; `null` reads as false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolIntString(pub bool);

impl BoolIntString {
    /// Wrapped value
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for BoolIntString {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<BoolIntString> for bool {
    fn from(value: BoolIntString) -> Self {
        value.0
    }
}

impl Display for BoolIntString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(encode_bool(self.0))
    }
}

impl Serialize for BoolIntString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(encode_bool(self.0))
    }
}

impl<'de> Deserialize<'de> for BoolIntString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(Self(false)),
            Some(Value::String(s)) => parse_bool(&s).map(Self).map_err(de::Error::custom),
            Some(other) => Err(de::Error::custom(TypeMismatch::new(BOOLEAN, &other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Flag {
        foo: BoolIntString,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counted {
        #[serde(default, with = "int_string", skip_serializing_if = "is_default")]
        id: u64,
        #[serde(
            default,
            deserialize_with = "nullable_string",
            skip_serializing_if = "String::is_empty"
        )]
        name: String,
    }

    #[test]
    fn bool_tokens_round_trip() {
        for raw in ["0", "1"] {
            let decoded = parse_bool(raw).unwrap();
            assert_eq!(encode_bool(decoded), raw);
        }
    }

    #[test]
    fn bool_rejects_other_tokens() {
        let err = parse_bool("2").unwrap_err();
        assert_eq!(err.raw, "\"2\"");
        assert!(err.to_string().starts_with(TYPE_MISMATCH_PREFIX));
    }

    #[test]
    fn bool_field_decodes_from_string() {
        let v: Flag = serde_json::from_str(r#"{"foo":"1"}"#).unwrap();
        assert!(v.foo.get());
        let v: Flag = serde_json::from_str(r#"{"foo":"0"}"#).unwrap();
        assert!(!v.foo.get());
    }

    #[test]
    fn bool_field_null_is_false() {
        let v: Flag = serde_json::from_str(r#"{"foo":null}"#).unwrap();
        assert_eq!(v, Flag::default());
    }

    #[test]
    fn bool_field_rejects_native_boolean() {
        let err = serde_json::from_str::<Flag>(r#"{"foo":true}"#).unwrap_err();
        assert!(err.to_string().starts_with(TYPE_MISMATCH_PREFIX));
        let err = serde_json::from_str::<Flag>(r#"{"foo":"2"}"#).unwrap_err();
        assert!(err.to_string().contains("\"2\""));
    }

    #[test]
    fn bool_field_encodes_as_string() {
        let out = serde_json::to_string(&Flag { foo: true.into() }).unwrap();
        assert_eq!(out, r#"{"foo":"1"}"#);
        let out = serde_json::to_string(&Flag { foo: false.into() }).unwrap();
        assert_eq!(out, r#"{"foo":"0"}"#);
    }

    #[test]
    fn int_string_decodes_digits_null_and_absent() {
        let v: Counted = serde_json::from_str(r#"{"id":"42","name":"x"}"#).unwrap();
        assert_eq!(v.id, 42);
        let v: Counted = serde_json::from_str(r#"{"id":null,"name":null}"#).unwrap();
        assert_eq!(v, Counted::default());
        let v: Counted = serde_json::from_str("{}").unwrap();
        assert_eq!(v, Counted::default());
        let v: Counted = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(v.id, 7);
    }

    #[test]
    fn int_string_rejects_garbage() {
        let err = serde_json::from_str::<Counted>(r#"{"id":"abc"}"#).unwrap_err();
        assert!(err.to_string().starts_with(TYPE_MISMATCH_PREFIX));
    }

    #[test]
    fn int_string_encodes_quoted_and_omits_zero() {
        let out = serde_json::to_string(&Counted { id: 8, name: String::new() }).unwrap();
        assert_eq!(out, r#"{"id":"8"}"#);
        let out = serde_json::to_string(&Counted::default()).unwrap();
        assert_eq!(out, "{}");
    }
}
