//! jsonmatch - declarative schema predicates over JSON values.
//!
//! A schema is itself JSON: literal values match by loose equality, objects
//! express field constraints, comparison operators (`$eq`, `$neq`, `$gt`,
//! `$gte`, `$lt`, `$lte`, `$in`, `$nin`, `$startsWith`, `$endsWith`,
//! `$exist`) constrain single values, combinators (`$and`, `$or`, `$not`)
//! compose sub-schemas, and `$ref` compares one part of the document against
//! another, with `$index` binding to the array element currently under test.
//!
//! Matching is a pure, synchronous walk over the input and schema; the
//! entry point always returns a boolean and never panics or errors, with
//! malformed schemas and unresolvable references counting as "no match".
//!
//! # Example
//!
//! ```
//! use jsonmatch::match_json_to_schema;
//! use serde_json::json;
//!
//! let event = json!({ "type": "created", "count": 2, "tags": ["a", "b"] });
//!
//! assert!(match_json_to_schema(&event, &json!({ "type": "created" })));
//! assert!(match_json_to_schema(&event, &json!({ "count": { "$gt": 1, "$lt": 3 } })));
//! assert!(match_json_to_schema(&event, &json!({ "tags": "a" })));
//! assert!(match_json_to_schema(
//!     &event,
//!     &json!({ "$or": [{ "type": "updated" }, { "type": "created" }] })
//! ));
//! ```

pub mod matcher;
pub mod operators;
pub mod path;
pub mod schema;
pub mod value;

use serde_json::Value;

pub use matcher::{FailReason, Matcher, Outcome};
pub use operators::{ComparisonOp, OperatorError};
pub use path::{PathError, PathSegment, RefPath};
pub use schema::{Operand, Pattern, SchemaNode};
pub use value::JsonKind;

/// Evaluates `schema` as a predicate over `input`.
///
/// The schema is compiled once and walked recursively; `$ref` operands
/// resolve against `input` as the root document.
pub fn match_json_to_schema(input: &Value, schema: &Value) -> bool {
    let node = SchemaNode::compile(schema);
    Matcher::new(input).evaluate(input, &node).is_match()
}
