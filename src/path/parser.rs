//! Reference path expression parser.

use super::ast::{PathSegment, RefPath};
use super::error::PathError;

/// Parser for reference path expressions.
pub struct Parser {
    input: String,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given expression.
    pub fn new(expression: &str) -> Self {
        Self {
            input: expression.to_string(),
            position: 0,
        }
    }

    /// Parses the expression into a RefPath.
    pub fn parse(expression: &str) -> Result<RefPath, PathError> {
        let mut parser = Parser::new(expression);
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<RefPath, PathError> {
        if self.is_eof() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();

        // The leading segment is either a bracket ([0], [$index]) or a
        // bare property name; subsequent names need a '.' separator.
        match self.peek() {
            Some('[') => segments.push(self.parse_bracket()?),
            _ => segments.push(PathSegment::Key(self.parse_identifier()?)),
        }

        while let Some(ch) = self.peek() {
            match ch {
                '.' => {
                    self.next();
                    segments.push(PathSegment::Key(self.parse_identifier()?));
                }
                '[' => segments.push(self.parse_bracket()?),
                _ => {
                    return Err(PathError::UnexpectedCharacter {
                        position: self.position,
                        found: ch,
                    });
                }
            }
        }

        Ok(RefPath::new(segments))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Checks if we've reached the end of input.
    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Expects a specific character and advances, or returns an error.
    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        let pos = self.position;
        match self.next() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(PathError::UnexpectedCharacter {
                position: pos,
                found: ch,
            }),
            None => Err(PathError::UnexpectedEnd { expected }),
        }
    }

    /// Parses a property name.
    fn parse_identifier(&mut self) -> Result<String, PathError> {
        let start = self.position;
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            Err(PathError::ExpectedIdentifier { position: start })
        } else {
            Ok(name)
        }
    }

    /// Parses a bracket segment: `[0]` or `[$index]`.
    fn parse_bracket(&mut self) -> Result<PathSegment, PathError> {
        self.expect('[')?;
        let mut body = String::new();
        loop {
            match self.peek() {
                Some(']') => {
                    self.next();
                    break;
                }
                Some(ch) => {
                    body.push(ch);
                    self.next();
                }
                None => return Err(PathError::UnexpectedEnd { expected: ']' }),
            }
        }

        if body == "$index" {
            Ok(PathSegment::IndexPlaceholder)
        } else {
            body.parse::<usize>()
                .map(PathSegment::Index)
                .map_err(|_| PathError::InvalidIndex { segment: body })
        }
    }
}
