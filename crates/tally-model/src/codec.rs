use bytes::Bytes;
use serde_json::Value;
use tally_common::{CodecConfig, DEFAULT_MAX_VALIDATION_DEPTH};

use crate::error::Error;
use crate::validate::Validate;
use crate::wire::WireValue;

pub fn to_value<T: WireValue>(value: &T) -> Value {
    value.to_wire()
}

pub fn to_vec<T: WireValue>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(&value.to_wire())?)
}

pub fn to_bytes<T: WireValue>(value: &T) -> Result<Bytes, Error> {
    to_vec(value).map(Bytes::from)
}

pub fn to_string<T: WireValue>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(&value.to_wire())?)
}

/// Decodes without validating; unknown fields and enum values are kept.
pub fn from_slice<T: WireValue>(bytes: &[u8]) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(T::from_wire(&value)?)
}

pub fn from_str<T: WireValue>(text: &str) -> Result<T, Error> {
    from_slice(text.as_bytes())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub validate: bool,
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            validate: false,
            max_depth: DEFAULT_MAX_VALIDATION_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn validating() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }
}

impl From<&CodecConfig> for DecodeOptions {
    fn from(config: &CodecConfig) -> Self {
        Self {
            validate: config.response_validation,
            max_depth: config.max_validation_depth,
        }
    }
}

/// Decodes a payload, validating it first when `options` ask for it.
pub fn decode<T: WireValue>(bytes: &[u8], options: DecodeOptions) -> Result<T, Error> {
    let decoded: T = from_slice(bytes)?;
    if options.validate
        && let Err(errors) = decoded.validate_with_depth(options.max_depth)
    {
        tracing::debug!(
            violations = errors.len(),
            max_depth = options.max_depth,
            "decoded payload failed validation"
        );
        return Err(errors.into());
    }
    Ok(decoded)
}
