//! Action: settings.set

use serde_json::Value;
use sofa_core::Payload;

pub const ACTION: &str = "settings.set";

pub fn apply(current: &Value, payload: &Payload) -> Value {
    let mut next = current.clone();
    if let (Some(map), Some(payload)) = (next.as_object_mut(), payload.raw().as_object()) {
        for (key, value) in payload {
            map.insert(key.clone(), value.clone());
        }
    }
    next
}
