//! Compiled schema node types.

use indexmap::IndexMap;
use serde_json::Value;

use crate::operators::ComparisonOp;
use crate::path::RefPath;

/// A schema, compiled into its structural form.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A primitive literal, compared by loose equality.
    Literal(Value),
    /// An array schema: a set of alternative per-element patterns.
    Alternatives(Vec<SchemaNode>),
    /// `{ "$ref": <path> }` standing alone: the referenced value becomes
    /// the schema at match time.
    Reference(RefPath),
    /// An object schema: a conjunction of entries.
    Pattern(Box<Pattern>),
    /// A construct that failed to compile; never matches anything.
    Invalid,
}

/// The compiled form of an object schema.
///
/// Every populated component must succeed for the pattern to match; the
/// comparison operators form the one component that is satisfied by any
/// single passing alternative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    /// `$and`: every listed schema must match the context value.
    pub all: Vec<SchemaNode>,
    /// `$or`: at least one listed schema must match the context value.
    /// An empty list is present but unsatisfiable.
    pub any: Option<Vec<SchemaNode>>,
    /// `$not`: the schema must not match the context value.
    pub negated: Option<SchemaNode>,
    /// `$exist`: presence requirement for the context value.
    pub presence: Option<Operand>,
    /// Comparison operators, evaluated as alternatives.
    pub comparisons: Vec<(ComparisonOp, Operand)>,
    /// `$ref` appearing alongside sibling entries.
    pub reference: Option<RefPath>,
    /// Plain field constraints, in schema order.
    pub fields: IndexMap<String, SchemaNode>,
}

impl Pattern {
    /// True when the object schema had no entries at all.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
            && self.any.is_none()
            && self.negated.is_none()
            && self.presence.is_none()
            && self.comparisons.is_empty()
            && self.reference.is_none()
            && self.fields.is_empty()
    }

    /// True when anything other than `$exist` constrains the value.
    ///
    /// A missing object key can only satisfy a pattern that is a bare
    /// presence check.
    pub(crate) fn constrains_beyond_presence(&self) -> bool {
        !self.all.is_empty()
            || self.any.is_some()
            || self.negated.is_some()
            || !self.comparisons.is_empty()
            || self.reference.is_some()
            || !self.fields.is_empty()
    }
}

/// The right-hand side of an operator, fixed at compile time or resolved
/// lazily against the match root.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal operand value.
    Literal(Value),
    /// `{ "$ref": <path> }`: resolved against the root at match time.
    Reference(RefPath),
    /// A `$ref` operand whose path was malformed; always fails.
    Invalid,
}
