//! Abstract syntax tree types for reference path expressions.

use super::error::PathError;
use super::parser::Parser;

/// A segment in a reference path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named property access (`property` or `.property`)
    Key(String),
    /// Array index (`[0]`)
    Index(usize),
    /// Positional placeholder (`[$index]`), bound during resolution
    IndexPlaceholder,
}

/// A complete parsed reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefPath {
    /// Segments that make up the path.
    pub segments: Vec<PathSegment>,
}

impl RefPath {
    /// Creates a new path from the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Parses a path expression string.
    pub fn parse(expression: &str) -> Result<RefPath, PathError> {
        Parser::parse(expression)
    }

    /// Number of `$index` placeholders awaiting substitution.
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, PathSegment::IndexPlaceholder))
            .count()
    }
}
