//! Reference path parser and resolver for `$ref` expressions.
//!
//! A `$ref` operand names a location inside the document being matched,
//! using dot/bracket notation resolved against the match root.
//!
//! # Supported Syntax
//!
//! - `property` - named property access
//! - `nested.property` - dotted descent
//! - `[2]` / `property[2]` - array index
//! - `[$index]` - positional placeholder, substituted from the array
//!   indices accumulated while the matcher broadcasts over arrays
//!   (outermost index first)
//!
//! # Examples
//!
//! ```
//! // current.something     - field of a field
//! // types[1]              - second element of an array field
//! // items[$index].b       - sibling field of the element under test
//! // [$index].b            - same, when the match root is itself an array
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use ast::{PathSegment, RefPath};
pub use error::PathError;
pub use parser::Parser;
pub use resolver::resolve;
