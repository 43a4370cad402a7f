//! The recursive structural matcher.
//!
//! [`Matcher`] walks a compiled [`SchemaNode`] against an input value and
//! produces an [`Outcome`]. Failures carry a coarse [`FailReason`] so tests
//! can see why a branch fell through, but every failure is local: reference
//! resolution errors and operator contract violations are downgraded to
//! "this branch does not match" at the point they occur, and the public
//! boundary collapses everything to a boolean.
//!
//! # Dispatch summary
//!
//! - literal vs primitive: loose equality
//! - literal vs array: at least one element equals the literal
//! - array schema vs array: one alternative must match every element
//! - operator set vs array: operators see the whole array
//! - plain object schema vs array: every element must match, with the
//!   element index pushed onto the `$index` stack
//! - combinators (`$and`/`$or`/`$not`) always see the whole context value
//! - `$ref` as a schema node: the referenced value is recompiled as the
//!   schema and matching restarts against it

use serde_json::Value;

use crate::path::{self, PathError, RefPath};
use crate::schema::{Operand, Pattern, SchemaNode};
use crate::value;

/// The result of evaluating a schema against a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matched,
    Failed(FailReason),
}

/// Why a branch failed to match.
#[derive(Debug, Clone, PartialEq)]
pub enum FailReason {
    /// A structural or value mismatch.
    Mismatch,
    /// A field named by the schema is absent from the input.
    MissingField,
    /// No comparison operator in the set passed.
    NoComparisonPassed,
    /// A `$not` sub-schema matched.
    Negated,
    /// An operator was applied outside its operand-type contract.
    OperatorContract,
    /// A `$ref` could not be resolved.
    Reference(PathError),
    /// The schema construct failed to compile.
    InvalidSchema,
}

impl Outcome {
    /// True when the branch matched.
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched)
    }

    fn fail(reason: FailReason) -> Outcome {
        Outcome::Failed(reason)
    }

    fn from_bool(matched: bool, reason: FailReason) -> Outcome {
        if matched {
            Outcome::Matched
        } else {
            Outcome::Failed(reason)
        }
    }
}

/// Evaluates compiled schemas against values, resolving `$ref` operands
/// against the root document it was created with.
pub struct Matcher<'a> {
    root: &'a Value,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher whose `$ref` expressions resolve against `root`.
    pub fn new(root: &'a Value) -> Self {
        Matcher { root }
    }

    /// Evaluates a compiled schema against `input`.
    pub fn evaluate(&self, input: &Value, schema: &SchemaNode) -> Outcome {
        self.eval_node(input, schema, &[])
    }

    fn eval_node(&self, input: &Value, node: &SchemaNode, indices: &[usize]) -> Outcome {
        match node {
            SchemaNode::Literal(literal) => self.eval_literal(input, literal, indices),
            SchemaNode::Alternatives(alternatives) => {
                self.eval_alternatives(input, alternatives, indices)
            }
            SchemaNode::Reference(path) => self.eval_reference(input, path, indices),
            SchemaNode::Pattern(pattern) => self.eval_pattern(input, pattern, indices),
            SchemaNode::Invalid => {
                log::trace!("malformed schema construct treated as non-match");
                Outcome::fail(FailReason::InvalidSchema)
            }
        }
    }

    /// A literal matches a primitive by loose equality and an array when at
    /// least one element matches; it never matches an object.
    fn eval_literal(&self, input: &Value, literal: &Value, indices: &[usize]) -> Outcome {
        match input {
            Value::Array(items) => {
                for (index, element) in items.iter().enumerate() {
                    let mut extended = indices.to_vec();
                    extended.push(index);
                    if self.eval_literal(element, literal, &extended).is_match() {
                        return Outcome::Matched;
                    }
                }
                Outcome::fail(FailReason::Mismatch)
            }
            Value::Object(_) => Outcome::fail(FailReason::Mismatch),
            _ => Outcome::from_bool(value::loose_eq(input, literal), FailReason::Mismatch),
        }
    }

    /// An array schema lists alternatives; the input array matches when one
    /// alternative matches every element.
    fn eval_alternatives(
        &self,
        input: &Value,
        alternatives: &[SchemaNode],
        indices: &[usize],
    ) -> Outcome {
        let Value::Array(items) = input else {
            return Outcome::fail(FailReason::Mismatch);
        };
        for alternative in alternatives {
            let covers_all = items.iter().enumerate().all(|(index, element)| {
                let mut extended = indices.to_vec();
                extended.push(index);
                self.eval_node(element, alternative, &extended).is_match()
            });
            if covers_all {
                return Outcome::Matched;
            }
        }
        Outcome::fail(FailReason::Mismatch)
    }

    /// `$ref` as a schema: the referenced value becomes the schema and
    /// matching restarts against it.
    fn eval_reference(&self, input: &Value, path: &RefPath, indices: &[usize]) -> Outcome {
        match path::resolve(self.root, path, indices) {
            Ok(referenced) => {
                let node = SchemaNode::compile(referenced);
                self.eval_node(input, &node, indices)
            }
            Err(error) => {
                log::trace!("$ref resolution failed: {error}");
                Outcome::fail(FailReason::Reference(error))
            }
        }
    }

    /// An object schema is a conjunction over its entries. Evaluation order:
    /// `$ref`, `$and`, `$or`, `$not`, `$exist`, the comparison set, then
    /// plain fields; the first failing entry short-circuits.
    fn eval_pattern(&self, input: &Value, pattern: &Pattern, indices: &[usize]) -> Outcome {
        if let Some(path) = &pattern.reference {
            let outcome = self.eval_reference(input, path, indices);
            if !outcome.is_match() {
                return outcome;
            }
        }

        for sub in &pattern.all {
            let outcome = self.eval_node(input, sub, indices);
            if !outcome.is_match() {
                return outcome;
            }
        }

        if let Some(alternatives) = &pattern.any {
            if !alternatives
                .iter()
                .any(|sub| self.eval_node(input, sub, indices).is_match())
            {
                return Outcome::fail(FailReason::Mismatch);
            }
        }

        if let Some(sub) = &pattern.negated {
            if self.eval_node(input, sub, indices).is_match() {
                return Outcome::fail(FailReason::Negated);
            }
        }

        if let Some(operand) = &pattern.presence {
            let outcome = self.eval_presence(operand, true, indices);
            if !outcome.is_match() {
                return outcome;
            }
        }

        if !pattern.comparisons.is_empty() {
            let outcome = self.eval_comparisons(input, pattern, indices);
            if !outcome.is_match() {
                return outcome;
            }
        }

        // An empty pattern keeps the shape check: composites satisfy it
        // vacuously, primitives do not.
        if !pattern.fields.is_empty() || pattern.is_empty() {
            let outcome = self.eval_fields(input, pattern, indices);
            if !outcome.is_match() {
                return outcome;
            }
        }

        Outcome::Matched
    }

    /// The comparison set is satisfied by any single passing operator.
    /// Contract violations and unresolvable operands fail only the
    /// alternative they belong to.
    fn eval_comparisons(&self, input: &Value, pattern: &Pattern, indices: &[usize]) -> Outcome {
        for (op, operand) in &pattern.comparisons {
            match self.resolve_operand(operand, indices) {
                Ok(operand_value) => match op.apply(input, operand_value) {
                    Ok(true) => return Outcome::Matched,
                    Ok(false) => {}
                    Err(error) => {
                        log::trace!("{} contract violation: {error}", op.key());
                    }
                },
                Err(error) => {
                    log::trace!("{} operand did not resolve: {error}", op.key());
                }
            }
        }
        Outcome::fail(FailReason::NoComparisonPassed)
    }

    /// Field constraints recurse into object entries and broadcast over
    /// arrays, requiring every element to match with its index pushed onto
    /// the `$index` stack. Primitives never satisfy field constraints.
    fn eval_fields(&self, input: &Value, pattern: &Pattern, indices: &[usize]) -> Outcome {
        match input {
            Value::Object(entries) => {
                for (key, sub) in &pattern.fields {
                    let outcome = self.eval_entry(entries.get(key), sub, indices);
                    if !outcome.is_match() {
                        return outcome;
                    }
                }
                Outcome::Matched
            }
            Value::Array(items) => {
                for (index, element) in items.iter().enumerate() {
                    let mut extended = indices.to_vec();
                    extended.push(index);
                    let outcome = self.eval_fields(element, pattern, &extended);
                    if !outcome.is_match() {
                        return outcome;
                    }
                }
                Outcome::Matched
            }
            _ => Outcome::fail(FailReason::Mismatch),
        }
    }

    /// A present key matches its sub-schema normally. An absent key is a
    /// mismatch unless the sub-schema is a bare `$exist` check, which gets
    /// to observe the absence.
    fn eval_entry(
        &self,
        value: Option<&Value>,
        sub: &SchemaNode,
        indices: &[usize],
    ) -> Outcome {
        match value {
            Some(value) => self.eval_node(value, sub, indices),
            None => {
                if let SchemaNode::Pattern(pattern) = sub {
                    if let Some(operand) = &pattern.presence {
                        if !pattern.constrains_beyond_presence() {
                            return self.eval_presence(operand, false, indices);
                        }
                    }
                }
                Outcome::fail(FailReason::MissingField)
            }
        }
    }

    /// `$exist` with a boolean operand; the operand may itself be a `$ref`.
    fn eval_presence(&self, operand: &Operand, present: bool, indices: &[usize]) -> Outcome {
        match self.resolve_operand(operand, indices) {
            Ok(Value::Bool(required)) => Outcome::from_bool(
                *required == present,
                if present {
                    FailReason::Mismatch
                } else {
                    FailReason::MissingField
                },
            ),
            Ok(other) => {
                log::trace!(
                    "$exist expects a boolean operand, got {}",
                    value::classify(other)
                );
                Outcome::fail(FailReason::OperatorContract)
            }
            Err(error) => Outcome::fail(FailReason::Reference(error)),
        }
    }

    /// Resolves an operand, following `$ref` against the root document.
    fn resolve_operand<'o>(
        &self,
        operand: &'o Operand,
        indices: &[usize],
    ) -> Result<&'o Value, PathError>
    where
        'a: 'o,
    {
        match operand {
            Operand::Literal(value) => Ok(value),
            Operand::Reference(path) => path::resolve(self.root, path, indices),
            Operand::Invalid => Err(PathError::NotAString),
        }
    }
}
