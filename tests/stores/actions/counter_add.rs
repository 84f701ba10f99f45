//! Action: counter.add

use serde::Deserialize;
use sofa_core::Payload;

pub const ACTION: &str = "counter.add";

#[derive(Deserialize)]
struct Input {
    amount: i64,
}

pub fn apply(current: &i64, payload: &Payload) -> i64 {
    match payload.decode::<Input>() {
        Ok(input) => current + input.amount,
        Err(_) => *current,
    }
}
