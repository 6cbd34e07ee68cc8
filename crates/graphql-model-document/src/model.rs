use serde_json::{Map, Value};

use crate::error::{DocumentError, DocumentResult};

/// Field values of one model instance, in insertion order.
///
/// An absent field and a field explicitly set to `null` are different things: create mutations
/// send the former as an explicit `null`, update mutations drop both.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ModelInstance(Map<String, Value>);

impl ModelInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes any value into an instance, it must serialize to a JSON object.
    pub fn from_serializable<T: serde::Serialize>(value: &T) -> DocumentResult<Self> {
        match serde_json::to_value(value)? {
            Value::Object(fields) => Ok(ModelInstance(fields)),
            other => Err(DocumentError::InvalidModelInstance {
                found: value_kind(&other).to_string(),
            }),
        }
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Value of `field` unless it is absent or `null`.
    pub fn non_null(&self, field: &str) -> Option<&Value> {
        self.get(field).filter(|value| !value.is_null())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ModelInstance {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ModelInstance(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
