//! Turning command-line arguments into storage types.

use serde::{Serialize, Serializer};
use stgty_core::StorageType;
use thiserror::Error;

/// Why an argument did not resolve to a storage type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Looked like a number but does not fit the native field.
    #[error("out of range for STGTY (u32)")]
    OutOfRange,

    /// Lookup of a raw value or name failed.
    #[error(transparent)]
    Lookup(#[from] stgty_core::Error),
}

/// How an argument reads as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    /// A value that fits in a `u32`.
    Value(u32),
    /// Numeric-looking, but negative, signed, too large or malformed hex.
    OutOfRange,
    /// Not a number; try it as a name.
    NotNumeric,
}

/// Result of decoding a single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub input: String,
    pub raw: Option<u32>,
    pub outcome: Result<StorageType, DecodeError>,
}

impl Decoded {
    /// Returns true if the argument named a known storage type.
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Tab-separated line for plain output.
    pub fn to_line(&self) -> String {
        match &self.outcome {
            Ok(ty) => format!("{}\t{}\t{}", ty.as_raw(), ty.native_name(), ty.short_name()),
            Err(err) => format!("{}: {}", self.input, err),
        }
    }
}

#[derive(Serialize)]
struct DecodedRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    short_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for Decoded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = match &self.outcome {
            Ok(ty) => DecodedRecord {
                input: &self.input,
                raw: Some(ty.as_raw()),
                name: Some(ty.native_name()),
                short_name: Some(ty.short_name()),
                error: None,
            },
            Err(err) => DecodedRecord {
                input: &self.input,
                raw: self.raw,
                name: None,
                short_name: None,
                error: Some(err.to_string()),
            },
        };
        record.serialize(serializer)
    }
}

/// Classifies an argument as `0x`-prefixed hex, unsigned decimal, or not a
/// number at all. Signs are never accepted.
pub fn parse_raw(input: &str) -> RawInput {
    let s = input.trim();

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return RawInput::OutOfRange;
        }
        return u32::from_str_radix(hex, 16).map_or(RawInput::OutOfRange, RawInput::Value);
    }

    let (signed, digits) = match s.strip_prefix('-').or_else(|| s.strip_prefix('+')) {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return RawInput::NotNumeric;
    }
    if signed {
        return RawInput::OutOfRange;
    }
    digits.parse().map_or(RawInput::OutOfRange, RawInput::Value)
}

/// Decodes one argument: numbers are looked up by raw value, anything else
/// by name.
pub fn decode(input: &str) -> Decoded {
    let (raw, outcome) = match parse_raw(input) {
        RawInput::Value(raw) => (Some(raw), StorageType::try_from(raw).map_err(DecodeError::from)),
        RawInput::OutOfRange => (None, Err(DecodeError::OutOfRange)),
        RawInput::NotNumeric => (None, input.parse::<StorageType>().map_err(DecodeError::from)),
    };

    Decoded {
        input: input.to_string(),
        raw,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw() {
        assert_eq!(parse_raw("2"), RawInput::Value(2));
        assert_eq!(parse_raw(" 0x4 "), RawInput::Value(4));
        assert_eq!(parse_raw("0XFFFFFFFF"), RawInput::Value(u32::MAX));
        assert_eq!(parse_raw("stream"), RawInput::NotNumeric);
        assert_eq!(parse_raw("STGTY_STREAM"), RawInput::NotNumeric);
    }

    #[test]
    fn test_parse_raw_out_of_range() {
        assert_eq!(parse_raw("-1"), RawInput::OutOfRange);
        assert_eq!(parse_raw("+4"), RawInput::OutOfRange);
        assert_eq!(parse_raw("4294967296"), RawInput::OutOfRange);
        assert_eq!(parse_raw("0x100000000"), RawInput::OutOfRange);
        assert_eq!(parse_raw("0xZZ"), RawInput::OutOfRange);
        assert_eq!(parse_raw("0x"), RawInput::OutOfRange);
        assert_eq!(parse_raw("0x+4"), RawInput::OutOfRange);
        assert_eq!(parse_raw("0x-4"), RawInput::OutOfRange);
    }

    #[test]
    fn test_decode_numbers_and_names() {
        let d = decode("3");
        assert!(d.is_resolved());
        assert_eq!(d.outcome, Ok(StorageType::LockBytes));
        assert_eq!(d.to_line(), "3\tSTGTY_LOCKBYTES\tlockbytes");

        let d = decode("STGTY_PROPERTY");
        assert_eq!(d.outcome, Ok(StorageType::Property));
        assert_eq!(d.to_line(), "4\tSTGTY_PROPERTY\tproperty");
    }

    #[test]
    fn test_decode_unknown() {
        let d = decode("0x10");
        assert!(!d.is_resolved());
        assert_eq!(d.raw, Some(16));
        assert_eq!(d.to_line(), "0x10: unknown storage type: 16");

        let d = decode("folder");
        assert_eq!(d.raw, None);
        assert_eq!(d.to_line(), "folder: unknown storage type name: folder");
    }

    #[test]
    fn test_decode_out_of_range_numbers() {
        for input in ["-1", "4294967296", "0xZZ", "0x+4"] {
            let d = decode(input);
            assert_eq!(d.raw, None);
            assert_eq!(d.outcome, Err(DecodeError::OutOfRange));
            assert_eq!(
                d.to_line(),
                format!("{}: out of range for STGTY (u32)", input)
            );
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&decode("2")).unwrap();
        assert_eq!(
            json,
            r#"{"input":"2","raw":2,"name":"STGTY_STREAM","type":"stream"}"#
        );

        let json = serde_json::to_string(&decode("9")).unwrap();
        assert_eq!(
            json,
            r#"{"input":"9","raw":9,"error":"unknown storage type: 9"}"#
        );

        let json = serde_json::to_string(&decode("folder")).unwrap();
        assert_eq!(
            json,
            r#"{"input":"folder","error":"unknown storage type name: folder"}"#
        );

        let json = serde_json::to_string(&decode("-1")).unwrap();
        assert_eq!(
            json,
            r#"{"input":"-1","error":"out of range for STGTY (u32)"}"#
        );
    }
}
