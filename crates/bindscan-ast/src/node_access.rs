//! NodeArena access methods.

use crate::base::NodeIndex;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use bindscan_common::Span;

impl NodeArena {
    /// Get a node header by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_parent(&self, index: NodeIndex) -> NodeIndex {
        if index.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(index.0 as usize)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    #[inline]
    pub fn get_span(&self, index: NodeIndex) -> Option<Span> {
        self.get(index).map(Node::span)
    }

    /// Get identifier data.
    /// Returns None if node is not an identifier or has no data.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get identifier data by index.
    #[inline]
    pub fn get_identifier_at(&self, index: NodeIndex) -> Option<&IdentifierData> {
        self.get(index).and_then(|node| self.get_identifier(node))
    }

    /// Resolve the text of an identifier node. None for any other kind.
    #[inline]
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        self.get_identifier_at(index)
            .map(|id| self.resolve_identifier_text(id))
    }

    /// Resolve an identifier's text through the arena's interner.
    #[inline]
    pub fn resolve_identifier_text(&self, data: &IdentifierData) -> &str {
        self.interner.resolve(data.atom)
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data() && node.kind == SyntaxKind::Literal {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get binding pattern data (ArrayPattern or ObjectPattern).
    #[inline]
    pub fn get_binding_pattern(&self, node: &Node) -> Option<&BindingPatternData> {
        if node.has_data() && node.kind.is_binding_pattern() {
            self.binding_patterns.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_property(&self, node: &Node) -> Option<&PropertyData> {
        if node.has_data() && node.kind == SyntaxKind::Property {
            self.properties.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_rest_element(&self, node: &Node) -> Option<&RestElementData> {
        if node.has_data() && node.kind == SyntaxKind::RestElement {
            self.rest_elements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_assignment_pattern(&self, node: &Node) -> Option<&AssignmentPatternData> {
        if node.has_data() && node.kind == SyntaxKind::AssignmentPattern {
            self.assignment_patterns.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_import_decl(&self, node: &Node) -> Option<&ImportDeclData> {
        if node.has_data() && node.kind == SyntaxKind::ImportDeclaration {
            self.import_decls.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get specifier data (ImportSpecifier, ImportDefaultSpecifier, ImportNamespaceSpecifier).
    #[inline]
    pub fn get_specifier(&self, node: &Node) -> Option<&SpecifierData> {
        if node.has_data() && node.kind.is_import_specifier() {
            self.specifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_opaque(&self, node: &Node) -> Option<&OpaqueData> {
        if node.has_data() && node.kind == SyntaxKind::Unknown {
            self.opaque_nodes.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Typed view of a node's payload.
    pub fn data(&self, node: &Node) -> NodeData<'_> {
        let data = match node.kind {
            SyntaxKind::Identifier => self.get_identifier(node).map(NodeData::Identifier),
            SyntaxKind::Literal => self.get_literal(node).map(NodeData::Literal),
            SyntaxKind::ArrayPattern => self.get_binding_pattern(node).map(NodeData::ArrayPattern),
            SyntaxKind::ObjectPattern => {
                self.get_binding_pattern(node).map(NodeData::ObjectPattern)
            }
            SyntaxKind::Property => self.get_property(node).map(NodeData::Property),
            SyntaxKind::RestElement => self.get_rest_element(node).map(NodeData::RestElement),
            SyntaxKind::AssignmentPattern => self
                .get_assignment_pattern(node)
                .map(NodeData::AssignmentPattern),
            SyntaxKind::ImportDeclaration => {
                self.get_import_decl(node).map(NodeData::ImportDeclaration)
            }
            SyntaxKind::ImportSpecifier
            | SyntaxKind::ImportDefaultSpecifier
            | SyntaxKind::ImportNamespaceSpecifier => self
                .get_specifier(node)
                .map(|spec| NodeData::ImportSpecifier(node.kind, spec)),
            SyntaxKind::Unknown => self.get_opaque(node).map(NodeData::Opaque),
        };
        data.unwrap_or(NodeData::Empty(node.kind))
    }

    /// Typed view of the node at `index`, or None if the handle does not resolve.
    #[inline]
    pub fn data_at(&self, index: NodeIndex) -> Option<NodeData<'_>> {
        self.get(index).map(|node| self.data(node))
    }

    /// The ESTree `type` string of a node, including opaque nodes.
    pub fn type_name(&self, node: &Node) -> &str {
        match self.get_opaque(node) {
            Some(opaque) => &opaque.type_name,
            None => node.kind.as_estree_type(),
        }
    }
}
