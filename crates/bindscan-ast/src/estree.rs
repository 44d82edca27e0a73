//! Lowering of ESTree JSON into a `NodeArena`.
//!
//! The input is whatever an ESTree producer (acorn, espree, meriyah,
//! typescript-estree) serialized for a binding position: a declarator `id`, a
//! function parameter, an assignment `left`, or an `ImportDeclaration`.
//!
//! Only the root is checked. It must be a JSON object with a string `type`.
//! Below the root nothing is rejected: a child that is not a node becomes an
//! opaque node, `null` array elements become holes, and unmodelled kinds keep
//! their `type` string but have no lowered children.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use bindscan_common::InvalidInputError;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Lower an ESTree node into a fresh arena, returning the arena and the root handle.
pub fn lower_estree(value: &Value) -> Result<(NodeArena, NodeIndex), InvalidInputError> {
    check_root_shape(value)?;

    let mut lowering = EstreeLowering::new();
    let root = lowering.lower_node(value);
    let arena = lowering.into_arena();
    debug!(nodes = arena.len(), root = root.0, "lowered ESTree tree");
    Ok((arena, root))
}

/// Shallow shape check applied to the root only.
pub fn check_root_shape(value: &Value) -> Result<&str, InvalidInputError> {
    let Some(object) = value.as_object() else {
        return Err(InvalidInputError::NotAnObject {
            found: json_kind(value),
        });
    };
    match object.get("type") {
        Some(Value::String(type_name)) => Ok(type_name),
        _ => Err(InvalidInputError::MissingKind),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Bottom-up builder that owns the arena while a tree is being lowered.
pub struct EstreeLowering {
    arena: NodeArena,
}

impl Default for EstreeLowering {
    fn default() -> Self {
        Self::new()
    }
}

impl EstreeLowering {
    pub fn new() -> Self {
        let mut arena = NodeArena::with_capacity(32);
        arena.interner.intern_common();
        EstreeLowering { arena }
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    /// Lower one node. Never fails: anything unusable becomes an opaque node.
    pub fn lower_node(&mut self, value: &Value) -> NodeIndex {
        let Some(object) = value.as_object() else {
            trace!(found = json_kind(value), "non-object in node position");
            return self.arena.add_opaque(0, 0, "");
        };
        let (pos, end) = span_of(object);
        let Some(type_name) = object.get("type").and_then(Value::as_str) else {
            trace!("object without a type in node position");
            return self.arena.add_opaque(pos, end, "");
        };

        match SyntaxKind::from_estree_type(type_name) {
            SyntaxKind::Identifier => match object.get("name").and_then(Value::as_str) {
                Some(name) => self.arena.add_identifier(pos, end, name),
                None => {
                    trace!("identifier without a name");
                    self.arena.add_opaque(pos, end, type_name)
                }
            },
            SyntaxKind::Literal => {
                let raw = match object.get("raw") {
                    Some(Value::String(raw)) => raw.clone(),
                    _ => object.get("value").map(Value::to_string).unwrap_or_default(),
                };
                self.arena.add_literal(pos, end, LiteralData { raw })
            }
            kind @ (SyntaxKind::ArrayPattern | SyntaxKind::ObjectPattern) => {
                let field = if kind == SyntaxKind::ArrayPattern {
                    "elements"
                } else {
                    "properties"
                };
                let elements = self.lower_list(object.get(field));
                self.arena
                    .add_binding_pattern(kind, pos, end, BindingPatternData { elements })
            }
            SyntaxKind::Property => {
                let key = self.lower_field(object, "key");
                let value = self.lower_field(object, "value");
                let data = PropertyData {
                    key,
                    value,
                    computed: flag(object, "computed"),
                    shorthand: flag(object, "shorthand"),
                };
                self.arena.add_property(pos, end, data)
            }
            SyntaxKind::RestElement => {
                let argument = self.lower_field(object, "argument");
                self.arena
                    .add_rest_element(pos, end, RestElementData { argument })
            }
            SyntaxKind::AssignmentPattern => {
                let left = self.lower_field(object, "left");
                let right = self.lower_field(object, "right");
                self.arena
                    .add_assignment_pattern(pos, end, AssignmentPatternData { left, right })
            }
            SyntaxKind::ImportDeclaration => {
                let specifiers = self.lower_list(object.get("specifiers"));
                let source = self.lower_field(object, "source");
                self.arena
                    .add_import_decl(pos, end, ImportDeclData { specifiers, source })
            }
            kind @ SyntaxKind::ImportSpecifier => {
                let imported = self.lower_field(object, "imported");
                let local = self.lower_field(object, "local");
                self.arena
                    .add_specifier(kind, pos, end, SpecifierData { imported, local })
            }
            kind @ (SyntaxKind::ImportDefaultSpecifier | SyntaxKind::ImportNamespaceSpecifier) => {
                let local = self.lower_field(object, "local");
                let data = SpecifierData {
                    imported: NodeIndex::NONE,
                    local,
                };
                self.arena.add_specifier(kind, pos, end, data)
            }
            SyntaxKind::Unknown => {
                trace!(type_name, "opaque node");
                self.arena.add_opaque(pos, end, type_name)
            }
        }
    }

    /// Lower an optional child field. Missing and `null` both mean no child.
    fn lower_field(&mut self, object: &Map<String, Value>, field: &str) -> NodeIndex {
        match object.get(field) {
            None | Some(Value::Null) => NodeIndex::NONE,
            Some(value) => self.lower_node(value),
        }
    }

    /// Lower a child array. `null` entries are kept as holes.
    fn lower_list(&mut self, value: Option<&Value>) -> NodeList {
        let Some(Value::Array(items)) = value else {
            return NodeList::new();
        };
        let mut list = NodeList::with_capacity(items.len());
        for item in items {
            let idx = if item.is_null() {
                NodeIndex::NONE
            } else {
                self.lower_node(item)
            };
            list.push(idx);
        }
        list
    }
}

/// acorn writes `start`/`end`; espree and typescript-estree write `range`.
fn span_of(object: &Map<String, Value>) -> (u32, u32) {
    let offset = |value: Option<&Value>| {
        value
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    if let (Some(start), Some(end)) = (offset(object.get("start")), offset(object.get("end"))) {
        return (start, end);
    }
    if let Some(Value::Array(range)) = object.get("range")
        && let [start, end] = range.as_slice()
        && let (Some(start), Some(end)) = (offset(Some(start)), offset(Some(end)))
    {
        return (start, end);
    }
    (0, 0)
}

fn flag(object: &Map<String, Value>, field: &str) -> bool {
    object.get(field).and_then(Value::as_bool).unwrap_or(false)
}
