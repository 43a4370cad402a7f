//! Resolution of parsed reference paths against a root document.

use serde_json::Value;

use super::ast::{PathSegment, RefPath};
use super::error::PathError;

/// Resolves a path against `root`, binding `$index` placeholders from
/// `indices` left to right (outermost array index first).
///
/// Returns the first value the path names, or an error when the path walks
/// off the document or has more placeholders than there are indices.
pub fn resolve<'a>(
    root: &'a Value,
    path: &RefPath,
    indices: &[usize],
) -> Result<&'a Value, PathError> {
    let mut bindings = indices.iter().copied();
    let mut current = root;

    for segment in &path.segments {
        current = match segment {
            PathSegment::Key(key) => current.get(key.as_str()),
            PathSegment::Index(index) => current.get(*index),
            PathSegment::IndexPlaceholder => {
                let index = bindings.next().ok_or(PathError::UnboundIndex)?;
                current.get(index)
            }
        }
        .ok_or(PathError::NotFound)?;
    }

    Ok(current)
}
