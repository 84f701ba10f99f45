//! Payload passed through to actions.
//!
//! The store never looks inside a payload; only the action interprets it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-supplied structured data for an action.
///
/// Defaults to the empty JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

impl Default for Payload {
    fn default() -> Self {
        Self::empty()
    }
}

impl Payload {
    /// The empty payload, `{}`.
    pub fn empty() -> Self {
        Payload(Value::Object(Map::new()))
    }

    /// Serialize a typed value into a payload.
    pub fn encode<S: Serialize>(value: &S) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Payload)
    }

    /// Deserialize the payload into a typed struct.
    pub fn decode<D: DeserializeOwned>(&self) -> Result<D, serde_json::Error> {
        serde_json::from_value(self.0.clone())
    }

    /// Look up a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Check that every listed field is present.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload(value)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        payload.0
    }
}
