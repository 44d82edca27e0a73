//! NodeArena creation methods (add_* methods).
//!
//! Trees are built bottom-up: children are added before their parent, and the
//! parent's constructor records itself as the parent of every child. A child
//! handle that does not name an existing node is stored as `NodeIndex::NONE`,
//! so every child index is lower than its parent's and the tree stays acyclic.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use bindscan_common::Interner;
use tracing::debug;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow on absurd inputs.
    const MAX_NODE_PREALLOC: usize = 1_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity.
    /// Binding patterns are mostly identifiers, so that pool gets the lion's share.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(safe_capacity);
        arena.parents = Vec::with_capacity(safe_capacity);
        arena.identifiers = Vec::with_capacity(safe_capacity / 2);
        arena.binding_patterns = Vec::with_capacity(safe_capacity / 8);
        arena.properties = Vec::with_capacity(safe_capacity / 8);
        arena
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        macro_rules! clear_vecs {
            ($($field:ident),+ $(,)?) => {
                $(self.$field.clear();)+
            };
        }

        clear_vecs!(
            nodes,
            parents,
            identifiers,
            literals,
            binding_patterns,
            properties,
            rest_elements,
            assignment_patterns,
            import_decls,
            specifiers,
            opaque_nodes,
        );
        self.interner = Interner::new();
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    /// Keep `child` only if it already exists; forward references become NONE.
    #[inline]
    fn existing_child(&self, child: NodeIndex) -> NodeIndex {
        if child.is_none() || (child.0 as usize) < self.nodes.len() {
            child
        } else {
            debug!(
                child = child.0,
                len = self.nodes.len(),
                "dropping child handle that does not precede its parent"
            );
            NodeIndex::NONE
        }
    }

    fn existing_children(&self, list: &mut NodeList) {
        for child in &mut list.nodes {
            *child = self.existing_child(*child);
        }
    }

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some()
            && let Some(slot) = self.parents.get_mut(child.0 as usize)
        {
            *slot = parent;
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::with_data(kind, pos, end, data_index));
        self.parents.push(NodeIndex::NONE);
        NodeIndex(index)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add an identifier node, interning its name.
    pub fn add_identifier(&mut self, pos: u32, end: u32, name: &str) -> NodeIndex {
        let atom = self.interner.intern(name);
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { atom });
        self.push_node(SyntaxKind::Identifier, pos, end, data_index)
    }

    /// Add a literal node
    pub fn add_literal(&mut self, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(SyntaxKind::Literal, pos, end, data_index)
    }

    /// Add an ArrayPattern or ObjectPattern node
    pub fn add_binding_pattern(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        mut data: BindingPatternData,
    ) -> NodeIndex {
        debug_assert!(kind.is_binding_pattern());
        self.existing_children(&mut data.elements);
        let elements = data.elements.clone();

        let data_index = self.binding_patterns.len() as u32;
        self.binding_patterns.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent_list(&elements, parent);
        parent
    }

    /// Add an object-pattern property
    pub fn add_property(&mut self, pos: u32, end: u32, mut data: PropertyData) -> NodeIndex {
        data.key = self.existing_child(data.key);
        data.value = self.existing_child(data.value);
        let (key, value) = (data.key, data.value);

        let data_index = self.properties.len() as u32;
        self.properties.push(data);
        let parent = self.push_node(SyntaxKind::Property, pos, end, data_index);
        self.set_parent(key, parent);
        self.set_parent(value, parent);
        parent
    }

    /// Add a rest element
    pub fn add_rest_element(
        &mut self,
        pos: u32,
        end: u32,
        mut data: RestElementData,
    ) -> NodeIndex {
        data.argument = self.existing_child(data.argument);
        let argument = data.argument;

        let data_index = self.rest_elements.len() as u32;
        self.rest_elements.push(data);
        let parent = self.push_node(SyntaxKind::RestElement, pos, end, data_index);
        self.set_parent(argument, parent);
        parent
    }

    /// Add a defaulted binding (`left = right`)
    pub fn add_assignment_pattern(
        &mut self,
        pos: u32,
        end: u32,
        mut data: AssignmentPatternData,
    ) -> NodeIndex {
        data.left = self.existing_child(data.left);
        data.right = self.existing_child(data.right);
        let (left, right) = (data.left, data.right);

        let data_index = self.assignment_patterns.len() as u32;
        self.assignment_patterns.push(data);
        let parent = self.push_node(SyntaxKind::AssignmentPattern, pos, end, data_index);
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    /// Add an import declaration
    pub fn add_import_decl(&mut self, pos: u32, end: u32, mut data: ImportDeclData) -> NodeIndex {
        self.existing_children(&mut data.specifiers);
        data.source = self.existing_child(data.source);
        let specifiers = data.specifiers.clone();
        let source = data.source;

        let data_index = self.import_decls.len() as u32;
        self.import_decls.push(data);
        let parent = self.push_node(SyntaxKind::ImportDeclaration, pos, end, data_index);
        self.set_parent_list(&specifiers, parent);
        self.set_parent(source, parent);
        parent
    }

    /// Add an import specifier of any of the three flavours
    pub fn add_specifier(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        mut data: SpecifierData,
    ) -> NodeIndex {
        debug_assert!(kind.is_import_specifier());
        data.imported = self.existing_child(data.imported);
        data.local = self.existing_child(data.local);
        let (imported, local) = (data.imported, data.local);

        let data_index = self.specifiers.len() as u32;
        self.specifiers.push(data);
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent(imported, parent);
        if local != imported {
            self.set_parent(local, parent);
        }
        parent
    }

    /// Add a node of a kind the arena does not model
    pub fn add_opaque(&mut self, pos: u32, end: u32, type_name: &str) -> NodeIndex {
        let data_index = self.opaque_nodes.len() as u32;
        self.opaque_nodes.push(OpaqueData {
            type_name: type_name.to_string(),
        });
        self.push_node(SyntaxKind::Unknown, pos, end, data_index)
    }
}
