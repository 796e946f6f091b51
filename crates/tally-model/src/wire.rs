use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::WireError;
use crate::validate::Validator;

/// Coarse JSON shape a typed field expects; drives structural variant matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Any,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl Shape {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Any => true,
            Shape::Bool => value.is_boolean(),
            Shape::Integer => value.is_i64() || value.is_u64(),
            Shape::Number => value.is_number(),
            Shape::String => value.is_string(),
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Any => "any",
            Shape::Bool => "boolean",
            Shape::Integer => "integer",
            Shape::Number => "number",
            Shape::String => "string",
            Shape::Array => "array",
            Shape::Object => "object",
        }
    }
}

/// Conversion between a typed value and its JSON wire form.
///
/// `to_wire` is infallible so setters can write straight into the raw store.
/// `from_wire` is strict; the raw store keeps the original value regardless.
pub trait WireValue: Sized {
    const SHAPE: Shape;

    fn to_wire(&self) -> Value;

    fn from_wire(value: &Value) -> Result<Self, WireError>;

    /// Reports violations found inside an already typed value.
    fn validate_into(&self, _validator: &mut Validator) {}

    /// Validates a raw wire value as this type, reporting instead of failing.
    fn validate_wire(value: &Value, validator: &mut Validator) {
        match Self::from_wire(value) {
            Ok(parsed) => parsed.validate_into(validator),
            Err(err) => validator.reject(err),
        }
    }
}

impl WireValue for String {
    const SHAPE: Shape = Shape::String;

    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| WireError::unexpected("string", value))
    }
}

impl WireValue for bool {
    const SHAPE: Shape = Shape::Bool;

    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_bool()
            .ok_or_else(|| WireError::unexpected("boolean", value))
    }
}

impl WireValue for i64 {
    const SHAPE: Shape = Shape::Integer;

    fn to_wire(&self) -> Value {
        Value::from(*self)
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_i64()
            .ok_or_else(|| WireError::unexpected("integer", value))
    }
}

impl WireValue for f64 {
    const SHAPE: Shape = Shape::Number;

    fn to_wire(&self) -> Value {
        number_to_wire(*self)
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_f64()
            .ok_or_else(|| WireError::unexpected("number", value))
    }
}

/// Integral values are written without a fraction so `0.0` goes out as `0`.
fn number_to_wire(value: f64) -> Value {
    // 2^53: beyond this f64 no longer represents every integer.
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        Value::from(value as i64)
    } else {
        Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl WireValue for Value {
    const SHAPE: Shape = Shape::Any;

    fn to_wire(&self) -> Value {
        self.clone()
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        Ok(value.clone())
    }
}

impl WireValue for OffsetDateTime {
    const SHAPE: Shape = Shape::String;

    fn to_wire(&self) -> Value {
        match self.format(&Rfc3339) {
            Ok(text) => Value::String(text),
            Err(err) => {
                tracing::warn!(error = %err, "timestamp not representable as RFC 3339");
                Value::Null
            }
        }
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        let text = value
            .as_str()
            .ok_or_else(|| WireError::unexpected("RFC 3339 timestamp", value))?;
        OffsetDateTime::parse(text, &Rfc3339).map_err(|_| WireError::UnexpectedType {
            expected: "RFC 3339 timestamp",
            found: "string",
        })
    }
}

impl<T: WireValue> WireValue for Option<T> {
    const SHAPE: Shape = Shape::Any;

    fn to_wire(&self) -> Value {
        match self {
            Some(value) => value.to_wire(),
            None => Value::Null,
        }
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_wire(other).map(Some),
        }
    }

    fn validate_into(&self, validator: &mut Validator) {
        if let Some(value) = self {
            value.validate_into(validator);
        }
    }

    fn validate_wire(value: &Value, validator: &mut Validator) {
        if !value.is_null() {
            T::validate_wire(value, validator);
        }
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    const SHAPE: Shape = Shape::Array;

    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_array()
            .ok_or_else(|| WireError::unexpected("array", value))?
            .iter()
            .map(T::from_wire)
            .collect()
    }

    fn validate_into(&self, validator: &mut Validator) {
        for (index, item) in self.iter().enumerate() {
            validator.at_index(index, |validator| item.validate_into(validator));
        }
    }

    fn validate_wire(value: &Value, validator: &mut Validator) {
        let Some(items) = value.as_array() else {
            validator.reject(WireError::unexpected("array", value));
            return;
        };
        for (index, item) in items.iter().enumerate() {
            validator.at_index(index, |validator| T::validate_wire(item, validator));
        }
    }
}

impl<T: WireValue> WireValue for BTreeMap<String, T> {
    const SHAPE: Shape = Shape::Object;

    fn to_wire(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(key, value)| (key.clone(), value.to_wire()))
            .collect();
        Value::Object(map)
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        value
            .as_object()
            .ok_or_else(|| WireError::unexpected("object", value))?
            .iter()
            .map(|(key, value)| T::from_wire(value).map(|parsed| (key.clone(), parsed)))
            .collect()
    }

    fn validate_into(&self, validator: &mut Validator) {
        for (key, value) in self {
            validator.at(key, |validator| value.validate_into(validator));
        }
    }

    fn validate_wire(value: &Value, validator: &mut Validator) {
        let Some(entries) = value.as_object() else {
            validator.reject(WireError::unexpected("object", value));
            return;
        };
        for (key, value) in entries {
            validator.at(key, |validator| T::validate_wire(value, validator));
        }
    }
}
