//! Schema representation and compilation.
//!
//! A schema arrives as a plain JSON value; before matching it is compiled
//! once into a tagged [`SchemaNode`] so the recursive walk never has to
//! re-probe raw maps for reserved keys. Malformed constructs (a combinator
//! with the wrong operand shape, a `$ref` whose path is not a string or
//! does not parse) compile into nodes that can never match, keeping
//! failures local to the branch that contains them.

pub mod compile;
pub mod node;

pub use node::{Operand, Pattern, SchemaNode};

/// Keys with reserved meaning inside a schema object.
pub fn is_reserved_key(key: &str) -> bool {
    matches!(key, "$and" | "$or" | "$not" | "$ref" | "$exist")
        || crate::operators::ComparisonOp::from_key(key).is_some()
}
