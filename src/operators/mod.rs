//! The comparison operator registry.
//!
//! Each operator carries a strict operand-type contract; applying one to an
//! unsupported pairing yields an [`OperatorError`], which the matcher
//! absorbs as "this operator fails" rather than propagating.
//!
//! `$exist` is deliberately absent here: presence testing has to observe
//! missing object keys, so the matcher handles it as part of field
//! dispatch instead of as a value-to-value comparison.

use std::cmp::Ordering;

use serde_json::Value;
use thiserror::Error;

use crate::value::{self, JsonKind};

/// A binary comparison operator from the schema vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,
    StartsWith,
    EndsWith,
}

/// An operator invocation that violated the operand-type contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("{op} does not accept a {kind} operand")]
    UnsupportedType { op: &'static str, kind: JsonKind },
}

impl OperatorError {
    fn unsupported(op: &'static str, offending: &Value) -> Self {
        OperatorError::UnsupportedType {
            op,
            kind: value::classify(offending),
        }
    }
}

impl ComparisonOp {
    /// Looks up an operator by its schema key.
    pub fn from_key(key: &str) -> Option<ComparisonOp> {
        match key {
            "$eq" => Some(ComparisonOp::Eq),
            "$neq" => Some(ComparisonOp::Neq),
            "$gt" => Some(ComparisonOp::Gt),
            "$gte" => Some(ComparisonOp::Gte),
            "$lt" => Some(ComparisonOp::Lt),
            "$lte" => Some(ComparisonOp::Lte),
            "$in" => Some(ComparisonOp::In),
            "$nin" => Some(ComparisonOp::Nin),
            "$startsWith" => Some(ComparisonOp::StartsWith),
            "$endsWith" => Some(ComparisonOp::EndsWith),
            _ => None,
        }
    }

    /// The schema key this operator is registered under.
    pub fn key(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "$eq",
            ComparisonOp::Neq => "$neq",
            ComparisonOp::Gt => "$gt",
            ComparisonOp::Gte => "$gte",
            ComparisonOp::Lt => "$lt",
            ComparisonOp::Lte => "$lte",
            ComparisonOp::In => "$in",
            ComparisonOp::Nin => "$nin",
            ComparisonOp::StartsWith => "$startsWith",
            ComparisonOp::EndsWith => "$endsWith",
        }
    }

    /// Applies the operator to `(value, operand)`.
    pub fn apply(&self, value: &Value, operand: &Value) -> Result<bool, OperatorError> {
        match self {
            ComparisonOp::Eq => Ok(value::loose_eq(value, operand)),
            ComparisonOp::Neq => Ok(!value::loose_eq(value, operand)),
            ComparisonOp::Gt => Ok(compare_ordered(value, operand, "$gt")?.is_gt()),
            ComparisonOp::Gte => Ok(compare_ordered(value, operand, "$gte")?.is_ge()),
            ComparisonOp::Lt => Ok(compare_ordered(value, operand, "$lt")?.is_lt()),
            ComparisonOp::Lte => Ok(compare_ordered(value, operand, "$lte")?.is_le()),
            ComparisonOp::In => contains(value, operand, "$in"),
            ComparisonOp::Nin => contains(value, operand, "$nin").map(|found| !found),
            ComparisonOp::StartsWith => {
                string_affix(value, operand, "$startsWith", |s, p| s.starts_with(p))
            }
            ComparisonOp::EndsWith => {
                string_affix(value, operand, "$endsWith", |s, p| s.ends_with(p))
            }
        }
    }
}

/// Ordering for `$gt`/`$gte`/`$lt`/`$lte`: numbers compare numerically,
/// strings lexicographically, any other pairing violates the contract.
fn compare_ordered(
    value: &Value,
    operand: &Value,
    op: &'static str,
) -> Result<Ordering, OperatorError> {
    match (value, operand) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            // JSON numbers are never NaN, so partial_cmp cannot fail here
            (Some(a), Some(b)) => a
                .partial_cmp(&b)
                .ok_or(OperatorError::unsupported(op, value)),
            _ => Err(OperatorError::unsupported(op, value)),
        },
        (Value::String(a), Value::String(b)) => Ok(a.as_str().cmp(b.as_str())),
        (Value::Number(_), _) | (Value::String(_), _) => {
            Err(OperatorError::unsupported(op, operand))
        }
        _ => Err(OperatorError::unsupported(op, value)),
    }
}

/// Dual-direction containment for `$in`/`$nin`.
///
/// An array operand takes priority: the value must equal one of its
/// elements. Failing that, an array value must contain the operand, and a
/// string value must contain the operand as a substring (numbers and
/// booleans are stringified for the substring test).
fn contains(value: &Value, operand: &Value, op: &'static str) -> Result<bool, OperatorError> {
    if let Value::Array(options) = operand {
        return Ok(options.iter().any(|option| value::strict_eq(option, value)));
    }
    match value {
        Value::Array(items) => Ok(items.iter().any(|item| value::strict_eq(item, operand))),
        Value::String(subject) => match operand {
            Value::String(needle) => Ok(subject.contains(needle.as_str())),
            Value::Number(_) | Value::Bool(_) => {
                Ok(subject.contains(&value::canonical_string(operand)))
            }
            _ => Err(OperatorError::unsupported(op, operand)),
        },
        _ => Err(OperatorError::unsupported(op, value)),
    }
}

/// Prefix/suffix test for `$startsWith`/`$endsWith`; the operand may be a
/// single string or an array of candidate strings.
fn string_affix(
    value: &Value,
    operand: &Value,
    op: &'static str,
    test: impl Fn(&str, &str) -> bool,
) -> Result<bool, OperatorError> {
    let Value::String(subject) = value else {
        return Err(OperatorError::unsupported(op, value));
    };
    match operand {
        Value::String(affix) => Ok(test(subject, affix)),
        Value::Array(options) => {
            for option in options {
                let Value::String(affix) = option else {
                    return Err(OperatorError::unsupported(op, option));
                };
                if test(subject, affix) {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        _ => Err(OperatorError::unsupported(op, operand)),
    }
}
