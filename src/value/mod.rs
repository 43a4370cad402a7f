//! JSON value classification and the equality rules used by the matcher.
//!
//! Two notions of equality coexist in the schema vocabulary:
//!
//! - *loose* equality, used by literal schemas and `$eq`/`$neq`: primitives
//!   compare with numeric coercion (`1` equals `"1"`, `true` equals `1`),
//!   while arrays and objects take part through their canonical
//!   serialization;
//! - *strict* equality, used for `$in`/`$nin` membership: values are equal
//!   only when they have the same shape, with numbers compared as f64.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// The shape of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Classifies a value into one of the six JSON shapes.
pub fn classify(value: &Value) -> JsonKind {
    match value {
        Value::Null => JsonKind::Null,
        Value::Bool(_) => JsonKind::Boolean,
        Value::Number(_) => JsonKind::Number,
        Value::String(_) => JsonKind::String,
        Value::Array(_) => JsonKind::Array,
        Value::Object(_) => JsonKind::Object,
    }
}

/// Returns true for null, booleans, numbers, and strings.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Compact serialization used when composites must be compared as a whole.
///
/// Object keys keep insertion order, so two objects are canonically equal
/// only when their entries were written in the same order.
pub fn canonical_string(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Loose equality over JSON values.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    let a = primitive_form(a);
    let b = primitive_form(b);
    match (a.as_ref(), b.as_ref()) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(x), Value::String(y)) => x == y,
        (x, y) => match (coerce_number(x), coerce_number(y)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Strict structural equality; numbers compare as f64, object entries by key.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(v, w)| strict_eq(v, w))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| strict_eq(v, w)))
        }
        _ => a == b,
    }
}

/// Composites collapse to their canonical serialization before loose
/// comparison; primitives pass through untouched.
fn primitive_form(value: &Value) -> Cow<'_, Value> {
    if is_primitive(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(Value::String(canonical_string(value)))
    }
}

/// Numeric coercion for loose equality: booleans become 0/1, strings parse
/// as numbers (the empty string is 0), null never coerces.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        _ => None,
    }
}
