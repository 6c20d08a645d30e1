use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Reads a decimal at a JSON pointer. Decimals are serialized as strings, but
/// plain numbers are accepted too.
#[allow(dead_code)]
pub fn decimal_at(value: &Value, pointer: &str) -> Decimal {
    match value.pointer(pointer) {
        Some(Value::String(s)) => Decimal::from_str(s)
            .unwrap_or_else(|_| panic!("{pointer} is not a decimal: {s}")),
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string())
            .unwrap_or_else(|_| panic!("{pointer} is not a decimal: {n}")),
        other => panic!("expected decimal at {pointer}, found {other:?} in {value}"),
    }
}

#[allow(dead_code)]
pub fn string_at<'a>(value: &'a Value, pointer: &str) -> &'a str {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("expected string at {pointer} in {value}"))
}
