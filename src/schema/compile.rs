//! Compilation of raw JSON schemas into [`SchemaNode`] form.

use serde_json::{Map, Value};

use super::node::{Operand, Pattern, SchemaNode};
use crate::operators::ComparisonOp;
use crate::path::RefPath;

impl SchemaNode {
    /// Compiles a schema value into its structural form.
    ///
    /// Compilation never fails outright: malformed constructs become
    /// [`SchemaNode::Invalid`], which fails exactly the branch they
    /// appear in.
    pub fn compile(schema: &Value) -> SchemaNode {
        match schema {
            Value::Array(items) => {
                SchemaNode::Alternatives(items.iter().map(SchemaNode::compile).collect())
            }
            Value::Object(entries) => compile_object(entries),
            _ => SchemaNode::Literal(schema.clone()),
        }
    }
}

fn compile_object(entries: &Map<String, Value>) -> SchemaNode {
    // { "$ref": <path> } with no siblings replaces the whole node
    if entries.len() == 1 {
        if let Some(path) = entries.get("$ref") {
            return match compile_ref_path(path) {
                Some(path) => SchemaNode::Reference(path),
                None => SchemaNode::Invalid,
            };
        }
    }

    let mut pattern = Pattern::default();
    for (key, entry) in entries {
        match key.as_str() {
            "$and" => match entry {
                Value::Array(items) => {
                    pattern.all = items.iter().map(SchemaNode::compile).collect();
                }
                _ => return SchemaNode::Invalid,
            },
            "$or" => match entry {
                Value::Array(items) => {
                    pattern.any = Some(items.iter().map(SchemaNode::compile).collect());
                }
                _ => return SchemaNode::Invalid,
            },
            "$not" => pattern.negated = Some(SchemaNode::compile(entry)),
            "$exist" => pattern.presence = Some(compile_operand(entry)),
            "$ref" => match compile_ref_path(entry) {
                Some(path) => pattern.reference = Some(path),
                None => return SchemaNode::Invalid,
            },
            _ => match ComparisonOp::from_key(key) {
                Some(op) => pattern.comparisons.push((op, compile_operand(entry))),
                None => {
                    pattern.fields.insert(key.clone(), SchemaNode::compile(entry));
                }
            },
        }
    }
    SchemaNode::Pattern(Box::new(pattern))
}

/// An operand is a reference only when it is an object whose single key is
/// `$ref`; any other object is an ordinary composite literal.
fn compile_operand(operand: &Value) -> Operand {
    if let Value::Object(entries) = operand {
        if entries.len() == 1 {
            if let Some(path) = entries.get("$ref") {
                return match compile_ref_path(path) {
                    Some(path) => Operand::Reference(path),
                    None => Operand::Invalid,
                };
            }
        }
    }
    Operand::Literal(operand.clone())
}

fn compile_ref_path(path: &Value) -> Option<RefPath> {
    RefPath::parse(path.as_str()?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compile_primitive_literal() {
        assert_eq!(
            SchemaNode::compile(&json!("created")),
            SchemaNode::Literal(json!("created"))
        );
    }

    #[test]
    fn test_compile_array_as_alternatives() {
        let node = SchemaNode::compile(&json!([1, "a"]));
        assert_eq!(
            node,
            SchemaNode::Alternatives(vec![
                SchemaNode::Literal(json!(1)),
                SchemaNode::Literal(json!("a")),
            ])
        );
    }

    #[test]
    fn test_compile_lone_ref_as_reference() {
        let node = SchemaNode::compile(&json!({ "$ref": "current.something" }));
        assert!(matches!(node, SchemaNode::Reference(_)));
    }

    #[test]
    fn test_compile_malformed_ref_as_invalid() {
        assert_eq!(
            SchemaNode::compile(&json!({ "$ref": { "bad": "ref" } })),
            SchemaNode::Invalid
        );
        assert_eq!(SchemaNode::compile(&json!({ "$ref": "" })), SchemaNode::Invalid);
    }

    #[test]
    fn test_compile_pattern_partitions_entries() {
        let node = SchemaNode::compile(&json!({
            "count": { "$gt": 1 },
            "$or": [1, 2],
            "$not": { "a": 1 },
            "$exist": true,
        }));
        let SchemaNode::Pattern(pattern) = node else {
            panic!("expected a pattern");
        };
        assert_eq!(pattern.fields.len(), 1);
        assert_eq!(pattern.any.as_ref().map(Vec::len), Some(2));
        assert!(pattern.negated.is_some());
        assert!(matches!(pattern.presence, Some(Operand::Literal(_))));
        assert!(pattern.comparisons.is_empty());
    }

    #[test]
    fn test_compile_operator_set() {
        let node = SchemaNode::compile(&json!({ "$gt": 1, "$lt": 3 }));
        let SchemaNode::Pattern(pattern) = node else {
            panic!("expected a pattern");
        };
        assert_eq!(pattern.comparisons.len(), 2);
        assert_eq!(pattern.comparisons[0].0, ComparisonOp::Gt);
        assert_eq!(pattern.comparisons[1].0, ComparisonOp::Lt);
    }

    #[test]
    fn test_compile_ref_operand() {
        let node = SchemaNode::compile(&json!({ "$eq": { "$ref": "a" } }));
        let SchemaNode::Pattern(pattern) = node else {
            panic!("expected a pattern");
        };
        assert!(matches!(
            pattern.comparisons[0].1,
            Operand::Reference(_)
        ));
        // an object operand with more than the $ref key stays a literal
        let node = SchemaNode::compile(&json!({ "$eq": { "$ref": "a", "b": 1 } }));
        let SchemaNode::Pattern(pattern) = node else {
            panic!("expected a pattern");
        };
        assert!(matches!(pattern.comparisons[0].1, Operand::Literal(_)));
    }

    #[test]
    fn test_compile_malformed_combinator_as_invalid() {
        assert_eq!(SchemaNode::compile(&json!({ "$and": 5 })), SchemaNode::Invalid);
        assert_eq!(
            SchemaNode::compile(&json!({ "$or": "nope" })),
            SchemaNode::Invalid
        );
    }

    #[test]
    fn test_reserved_keys() {
        for key in ["$and", "$or", "$not", "$ref", "$exist", "$eq", "$nin"] {
            assert!(crate::schema::is_reserved_key(key));
        }
        assert!(!crate::schema::is_reserved_key("count"));
        assert!(!crate::schema::is_reserved_key("$unknown"));
    }
}
