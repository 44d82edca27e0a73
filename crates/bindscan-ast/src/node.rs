//! Thin node headers and typed data pools.
//!
//! Each `Node` is a small header (kind, position, data index). The payload of a
//! node lives in the pool for its kind, so walking a pattern touches only the
//! headers and pools it actually needs.
//!
//! `NodeArena::data` turns a header back into a `NodeData`, a closed enum of
//! borrowed payloads. Code that dispatches on node shape matches on that enum
//! instead of probing fields.

use crate::base::{NodeIndex, NodeList};
use crate::syntax_kind::SyntaxKind;
use bindscan_common::{Atom, Interner, Span};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Start position in source (character index)
    pub pos: u32,
    /// End position in source (character index)
    pub end: u32,
    /// Index into the kind-specific pool (u32::MAX = no data)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn with_data(kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

/// Data for identifiers
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentifierData {
    pub atom: Atom,
}

/// Data for string/number/boolean/null/regex literals (kept as raw text)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LiteralData {
    pub raw: String,
}

/// Data for ArrayPattern (`elements`, holes are `NodeIndex::NONE`) and
/// ObjectPattern (`elements` are its properties, in source order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

/// Data for an object-pattern property (`key: value`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyData {
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub computed: bool,
    pub shorthand: bool,
}

/// Data for RestElement (`...argument`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestElementData {
    pub argument: NodeIndex,
}

/// Data for AssignmentPattern (`left = right`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssignmentPatternData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// Data for ImportDeclaration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImportDeclData {
    /// Default specifier first (if any), then named or namespace specifiers.
    pub specifiers: NodeList,
    pub source: NodeIndex,
}

/// Data for the three import specifier kinds.
///
/// `imported` is the exported name for `import { imported as local }` and
/// `NONE` for default and namespace specifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpecifierData {
    pub imported: NodeIndex,
    pub local: NodeIndex,
}

/// Data for nodes whose kind is not modelled. Children are not lowered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpaqueData {
    pub type_name: String,
}

/// Borrowed view of a node's payload, one variant per modelled shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeData<'a> {
    Identifier(&'a IdentifierData),
    Literal(&'a LiteralData),
    ArrayPattern(&'a BindingPatternData),
    ObjectPattern(&'a BindingPatternData),
    Property(&'a PropertyData),
    RestElement(&'a RestElementData),
    AssignmentPattern(&'a AssignmentPatternData),
    ImportDeclaration(&'a ImportDeclData),
    /// Any of ImportSpecifier, ImportDefaultSpecifier, ImportNamespaceSpecifier.
    ImportSpecifier(SyntaxKind, &'a SpecifierData),
    Opaque(&'a OpaqueData),
    /// Header with no payload (or a payload index that does not resolve).
    Empty(SyntaxKind),
}

/// Arena owning every node of one lowered tree.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    /// Parent of each node, parallel to `nodes`. Roots have `NodeIndex::NONE`.
    pub parents: Vec<NodeIndex>,

    // Typed data pools
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub binding_patterns: Vec<BindingPatternData>,
    pub properties: Vec<PropertyData>,
    pub rest_elements: Vec<RestElementData>,
    pub assignment_patterns: Vec<AssignmentPatternData>,
    pub import_decls: Vec<ImportDeclData>,
    pub specifiers: Vec<SpecifierData>,
    pub opaque_nodes: Vec<OpaqueData>,

    pub(crate) interner: Interner,
}
