use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use tally_model::{Shape, WireError, WireValue, json_kind, model};

/// One value of a grouping key in an evaluation result.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupingValue {
    String(String),
    Number(f64),
    Bool(bool),
}

impl WireValue for GroupingValue {
    const SHAPE: Shape = Shape::Any;

    fn to_wire(&self) -> Value {
        match self {
            GroupingValue::String(value) => value.to_wire(),
            GroupingValue::Number(value) => value.to_wire(),
            GroupingValue::Bool(value) => value.to_wire(),
        }
    }

    fn from_wire(value: &Value) -> Result<Self, WireError> {
        match value {
            Value::String(value) => Ok(GroupingValue::String(value.clone())),
            Value::Bool(value) => Ok(GroupingValue::Bool(*value)),
            Value::Number(_) => f64::from_wire(value).map(GroupingValue::Number),
            other => Err(WireError::UnexpectedType {
                expected: "string, number or boolean",
                found: json_kind(other),
            }),
        }
    }
}

impl Serialize for GroupingValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GroupingValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(&value).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for GroupingValue {
    fn from(value: &str) -> Self {
        GroupingValue::String(value.to_string())
    }
}

impl From<String> for GroupingValue {
    fn from(value: String) -> Self {
        GroupingValue::String(value)
    }
}

impl From<f64> for GroupingValue {
    fn from(value: f64) -> Self {
        GroupingValue::Number(value)
    }
}

impl From<bool> for GroupingValue {
    fn from(value: bool) -> Self {
        GroupingValue::Bool(value)
    }
}

model! {
    /// Usage and amount for one combination of grouping values.
    pub struct EvaluatePriceGroup {
        required amount / set_amount: String = "amount";
        /// Values in the order of the requested grouping keys.
        required grouping_values / set_grouping_values: Vec<GroupingValue> = "grouping_values";
        required quantity / set_quantity: f64 = "quantity";
    }
}
