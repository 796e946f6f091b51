use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, WireError};
use crate::field::Field;
use crate::model::FieldSpec;
use crate::wire::WireValue;

/// Every wire key of a model instance, known or not, with its JSON value.
///
/// Typed accessors read from it and setters write into it; serialization
/// emits it as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFields {
    entries: Map<String, Value>,
}

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn from_value(value: &Value) -> Result<Self, WireError> {
        match value {
            Value::Object(entries) => Ok(Self::from_map(entries.clone())),
            other => Err(WireError::unexpected("object", other)),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Whether `key` was present on the wire (or assigned), null included.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Value::Null))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Entries whose keys are not in `known`.
    pub fn unknown<'a>(
        &'a self,
        known: &'a [FieldSpec],
    ) -> impl Iterator<Item = (&'a String, &'a Value)> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| !known.iter().any(|spec| spec.wire == key.as_str()))
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn required<T: WireValue>(&self, key: &'static str) -> Result<T, Error> {
        match self.entries.get(key) {
            Some(value) => Ok(T::from_wire(value)?),
            None => Err(WireError::MissingField(key).into()),
        }
    }

    /// Reads an optional non-nullable field; a wire `null` reads as unset.
    ///
    /// The `null` entry itself stays in the store and is re-serialized.
    pub fn optional<T: WireValue>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.entries.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(T::from_wire(value)?)),
        }
    }

    pub fn nullable<T: WireValue>(&self, key: &str) -> Result<Field<T>, Error> {
        match self.entries.get(key) {
            None => Ok(Field::Unset),
            Some(Value::Null) => Ok(Field::Null),
            Some(value) => Ok(Field::Value(T::from_wire(value)?)),
        }
    }

    pub fn set<T: WireValue>(&mut self, key: &str, value: &T) {
        self.entries.insert(key.to_string(), value.to_wire());
    }

    /// `None` leaves the field unset; it is never written as `null`.
    pub fn set_optional<T: WireValue>(&mut self, key: &str, value: Option<&T>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.entries.remove(key);
            }
        }
    }

    /// `None` records an explicit `null`, which is serialized.
    pub fn set_nullable<T: WireValue>(&mut self, key: &str, value: Option<&T>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.entries.insert(key.to_string(), Value::Null);
            }
        }
    }

    pub fn set_field<T: WireValue>(&mut self, key: &str, field: Field<&T>) {
        match field {
            Field::Unset => {
                self.entries.remove(key);
            }
            Field::Null => {
                self.entries.insert(key.to_string(), Value::Null);
            }
            Field::Value(value) => self.set(key, value),
        }
    }
}

impl From<Map<String, Value>> for RawFields {
    fn from(entries: Map<String, Value>) -> Self {
        Self::from_map(entries)
    }
}

impl Serialize for RawFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawFields {
        RawFields::from_value(&value).unwrap()
    }

    #[test]
    fn presence_is_independent_of_nullness() {
        let fields = raw(json!({"a": null, "b": 1}));
        assert!(fields.contains("a"));
        assert!(fields.is_null("a"));
        assert!(fields.contains("b"));
        assert!(!fields.is_null("b"));
        assert!(!fields.contains("c"));
        assert!(!fields.is_null("c"));
    }

    #[test]
    fn nullable_reads_three_states() {
        let fields = raw(json!({"a": null, "b": "x"}));
        assert_eq!(fields.nullable::<String>("a").unwrap(), Field::Null);
        assert_eq!(
            fields.nullable::<String>("b").unwrap(),
            Field::Value("x".to_string())
        );
        assert_eq!(fields.nullable::<String>("c").unwrap(), Field::Unset);
    }

    #[test]
    fn optional_treats_wire_null_as_unset() {
        let fields = raw(json!({"a": null}));
        assert_eq!(fields.optional::<String>("a").unwrap(), None);
        assert_eq!(fields.optional::<String>("missing").unwrap(), None);
    }

    #[test]
    fn required_reports_missing_key() {
        let fields = RawFields::new();
        assert!(matches!(
            fields.required::<String>("name"),
            Err(Error::Wire(WireError::MissingField("name")))
        ));
    }

    #[test]
    fn setters_mirror_wire_semantics() {
        let mut fields = RawFields::new();
        fields.set_nullable::<String>("nullable", None);
        fields.set_optional::<String>("optional", None);
        assert!(fields.contains("nullable"));
        assert!(fields.is_null("nullable"));
        assert!(!fields.contains("optional"));

        fields.set_optional("optional", Some(&"v".to_string()));
        fields.set_optional::<String>("optional", None);
        assert!(!fields.contains("optional"));

        fields.set_field::<String>("nullable", Field::Unset);
        assert!(!fields.contains("nullable"));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(matches!(
            RawFields::from_value(&json!([1, 2])),
            Err(WireError::UnexpectedType {
                expected: "object",
                found: "array"
            })
        ));
    }
}
