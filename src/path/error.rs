//! Error types for reference path parsing and resolution.

use thiserror::Error;

/// Errors that can occur while parsing or resolving a reference path.
///
/// The matcher downgrades every one of these to "this branch does not
/// match"; they never escape the public boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path expression was empty.
    #[error("path expression is empty")]
    Empty,
    /// A property name was expected at the given position.
    #[error("expected identifier at position {position}")]
    ExpectedIdentifier { position: usize },
    /// A character that fits no segment form.
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { position: usize, found: char },
    /// The expression ended inside a segment.
    #[error("unexpected end of path expression, expected '{expected}'")]
    UnexpectedEnd { expected: char },
    /// A bracket segment that is neither an index nor `$index`.
    #[error("invalid bracket segment '{segment}'")]
    InvalidIndex { segment: String },
    /// A `$ref` operand that is not a string.
    #[error("reference path is not a string")]
    NotAString,
    /// The path named a location absent from the document.
    #[error("no value at the referenced path")]
    NotFound,
    /// An `$index` placeholder with no accumulated array index to bind.
    #[error("'$index' placeholder outside of an array iteration")]
    UnboundIndex,
}
