//! ESTree fixture builders in the shape acorn (ecmaVersion 2022) emits.
//!
//! Positions are left out; the walker never looks at them.
#![allow(dead_code)]

use serde_json::{Value, json};

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

/// `[a, , b]` is `array(vec![Some(ident("a")), None, Some(ident("b"))])`.
pub fn array(elements: Vec<Option<Value>>) -> Value {
    let elements: Vec<Value> = elements
        .into_iter()
        .map(|elem| elem.unwrap_or(Value::Null))
        .collect();
    json!({ "type": "ArrayPattern", "elements": elements })
}

pub fn object(properties: Vec<Value>) -> Value {
    json!({ "type": "ObjectPattern", "properties": properties })
}

/// `{ key: value }`
pub fn prop(key: &str, value: Value) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": false,
        "computed": false,
        "key": ident(key),
        "kind": "init",
        "value": value
    })
}

/// `{ name }`
pub fn shorthand(name: &str) -> Value {
    json!({
        "type": "Property",
        "method": false,
        "shorthand": true,
        "computed": false,
        "key": ident(name),
        "kind": "init",
        "value": ident(name)
    })
}

pub fn rest(argument: Value) -> Value {
    json!({ "type": "RestElement", "argument": argument })
}

pub fn assign(left: Value, right: Value) -> Value {
    json!({ "type": "AssignmentPattern", "left": left, "right": right })
}

pub fn number(value: u32) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn member(object: &str, property: &str) -> Value {
    json!({
        "type": "MemberExpression",
        "object": ident(object),
        "property": ident(property),
        "computed": false,
        "optional": false
    })
}
