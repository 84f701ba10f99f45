//! Action: counter.reset

use sofa_core::Payload;

pub const ACTION: &str = "counter.reset";

pub fn apply(_current: &i64, _payload: &Payload) -> i64 {
    0
}
