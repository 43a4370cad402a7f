//! Integration tests for operator contracts as seen through the public
//! entry point: containment direction, affix operands, and the type
//! pairings the ordering operators accept.

use jsonmatch::match_json_to_schema;
use serde_json::{json, Value};

fn check(input: Value, schema: Value, expected: bool) {
    assert_eq!(
        match_json_to_schema(&input, &schema),
        expected,
        "input {input} vs schema {schema}"
    );
}

#[test]
fn test_in_with_an_operand_array() {
    check(json!({ "id": 123 }), json!({ "id": { "$in": [123, 456] } }), true);
    check(json!({ "id": 789 }), json!({ "id": { "$in": [123, 456] } }), false);
    check(json!({ "id": "a" }), json!({ "id": { "$in": ["a", "b"] } }), true);
    // membership is strict: no numeric coercion against the elements
    check(json!({ "id": "123" }), json!({ "id": { "$in": [123, 456] } }), false);
}

#[test]
fn test_in_operand_array_outranks_value_array() {
    check(
        json!({ "pair": [1, 2] }),
        json!({ "pair": { "$in": [[1, 2], [3, 4]] } }),
        true,
    );
    check(json!({ "pair": [1, 2] }), json!({ "pair": { "$in": [1, 2] } }), false);
}

#[test]
fn test_in_against_a_value_collection() {
    check(
        json!({ "tags": ["test", "something"] }),
        json!({ "tags": { "$in": "test" } }),
        true,
    );
    check(
        json!({ "tags": ["test", "something"] }),
        json!({ "tags": { "$in": "missing" } }),
        false,
    );
    check(json!({ "test": "some-text" }), json!({ "test": { "$in": "text" } }), true);
    check(json!({ "test": "some-text" }), json!({ "test": { "$in": "nope" } }), false);
    // number and boolean operands are stringified for the substring test
    check(json!({ "test": "room 12" }), json!({ "test": { "$in": 12 } }), true);
    check(json!({ "test": "it is true" }), json!({ "test": { "$in": true } }), true);
}

#[test]
fn test_nin_negates_the_same_test() {
    check(json!({ "id": 789 }), json!({ "id": { "$nin": [123, 456] } }), true);
    check(json!({ "id": 123 }), json!({ "id": { "$nin": [123, 456] } }), false);
    check(json!({ "test": "some-text" }), json!({ "test": { "$nin": "some" } }), false);
    check(
        json!({ "tags": ["test", "something"] }),
        json!({ "tags": { "$nin": "test" } }),
        false,
    );
    // a contract violation is not inverted into a match
    check(json!({ "id": 1 }), json!({ "id": { "$nin": 2 } }), false);
}

#[test]
fn test_containment_conjoined_across_fields() {
    check(
        json!({ "test": "some-text", "tags": ["test", "something"] }),
        json!({ "test": { "$in": "text" }, "tags": { "$in": "test" } }),
        true,
    );
    check(
        json!({ "test": "some-text", "tags": ["test", "something"] }),
        json!({ "test": { "$in": "nope" }, "tags": { "$in": "test" } }),
        false,
    );
}

#[test]
fn test_affix_operators() {
    check(json!({ "test": "some-text" }), json!({ "test": { "$startsWith": "some" } }), true);
    check(json!({ "test": "some-text" }), json!({ "test": { "$endsWith": "some" } }), false);
    check(json!({ "test": "some-text" }), json!({ "test": { "$endsWith": "text" } }), true);
    // an array operand offers alternative affixes
    check(
        json!({ "test": "some-text" }),
        json!({ "test": { "$startsWith": ["x", "some"] } }),
        true,
    );
    check(
        json!({ "test": "some-text" }),
        json!({ "test": { "$endsWith": ["x", "y"] } }),
        false,
    );
    check(json!({ "test": 7 }), json!({ "test": { "$startsWith": "7" } }), false);
}

#[test]
fn test_ordering_accepts_matching_types_only() {
    check(json!({ "count": 2 }), json!({ "count": { "$gte": 2 } }), true);
    check(json!({ "count": 2 }), json!({ "count": { "$gte": 3 } }), false);
    check(json!({ "title": "beta" }), json!({ "title": { "$lt": "gamma" } }), true);
    // mixed pairings violate the contract instead of coercing
    check(json!({ "count": 2 }), json!({ "count": { "$gt": "1" } }), false);
    check(json!({ "title": "2" }), json!({ "title": { "$gt": 1 } }), false);
    check(json!({ "flag": true }), json!({ "flag": { "$gt": 0 } }), false);
    check(json!({ "count": null }), json!({ "count": { "$lt": 1 } }), false);
}

#[test]
fn test_eq_coerces_but_in_does_not() {
    check(json!({ "n": 1 }), json!({ "n": { "$eq": "1" } }), true);
    check(json!({ "n": [1] }), json!({ "n": { "$in": ["1"] } }), false);
    check(json!({ "n": 1 }), json!({ "n": { "$in": ["1", 1] } }), true);
}

#[test]
fn test_fractional_ordering() {
    check(json!({ "ratio": 0.5 }), json!({ "ratio": { "$lt": 0.75 } }), true);
    check(json!({ "ratio": 0.5 }), json!({ "ratio": { "$gt": 0.75 } }), false);
    check(json!({ "ratio": 0.5 }), json!({ "ratio": { "$eq": 0.5 } }), true);
}
