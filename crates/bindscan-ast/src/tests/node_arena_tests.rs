//! Tests for NodeArena construction and access.
use crate::node::*;
use crate::{NodeIndex, NodeList, SyntaxKind};

#[test]
fn test_node_index() {
    let index = NodeIndex(0);
    assert!(index.is_some());
    assert!(!index.is_none());

    let none = NodeIndex::NONE;
    assert!(none.is_none());
    assert!(!none.is_some());
    assert_eq!(NodeIndex::default(), NodeIndex::NONE);
}

#[test]
fn test_identifier_names_are_interned() {
    let mut arena = NodeArena::new();
    let first = arena.add_identifier(0, 1, "a");
    let second = arena.add_identifier(5, 6, "a");

    let a1 = arena.get_identifier_at(first).unwrap().atom;
    let a2 = arena.get_identifier_at(second).unwrap().atom;
    assert_eq!(a1, a2);
    assert_ne!(first, second);
    assert_eq!(arena.get_identifier_text(second), Some("a"));
    assert_eq!(arena.get_span(second).map(|s| s.start), Some(5));
}

#[test]
fn test_binding_pattern_sets_parents_and_keeps_holes() {
    let mut arena = NodeArena::new();
    let a = arena.add_identifier(1, 2, "a");
    let b = arena.add_identifier(6, 7, "b");
    let pattern = arena.add_binding_pattern(
        SyntaxKind::ArrayPattern,
        0,
        8,
        BindingPatternData {
            elements: NodeList::from(vec![a, NodeIndex::NONE, b]),
        },
    );

    assert_eq!(arena.get_parent(a), pattern);
    assert_eq!(arena.get_parent(b), pattern);
    assert_eq!(arena.get_parent(pattern), NodeIndex::NONE);

    let node = arena.get(pattern).unwrap();
    let data = arena.get_binding_pattern(node).unwrap();
    assert_eq!(data.elements.len(), 3);
    assert!(data.elements.nodes[1].is_none());
}

#[test]
fn test_children_must_precede_their_parent() {
    let mut arena = NodeArena::new();
    // Element 0 is the pattern's own index; element 7 does not exist yet.
    let pattern = arena.add_binding_pattern(
        SyntaxKind::ArrayPattern,
        0,
        4,
        BindingPatternData {
            elements: NodeList::from(vec![NodeIndex(0), NodeIndex::NONE, NodeIndex(7)]),
        },
    );
    assert_eq!(pattern, NodeIndex(0));
    let data = arena.get_binding_pattern(arena.get(pattern).unwrap()).unwrap();
    assert!(data.elements.nodes.iter().all(|elem| elem.is_none()));
    assert_eq!(arena.get_parent(pattern), NodeIndex::NONE);

    let rest = arena.add_rest_element(
        5,
        9,
        RestElementData {
            argument: NodeIndex(1),
        },
    );
    let data = arena.get_rest_element(arena.get(rest).unwrap()).unwrap();
    assert!(data.argument.is_none());

    // Existing children are kept and linked.
    let a = arena.add_identifier(10, 11, "a");
    let property = arena.add_property(
        10,
        11,
        PropertyData {
            key: a,
            value: NodeIndex(99),
            computed: false,
            shorthand: true,
        },
    );
    let data = arena.get_property(arena.get(property).unwrap()).unwrap();
    assert_eq!(data.key, a);
    assert!(data.value.is_none());
    assert_eq!(arena.get_parent(a), property);
}

#[test]
fn test_empty_identifier_name_resolves() {
    let mut arena = NodeArena::new();
    let empty = arena.add_identifier(0, 0, "");
    assert_eq!(arena.get_identifier_text(empty), Some(""));
}

#[test]
fn test_typed_view_matches_kind() {
    let mut arena = NodeArena::new();
    let key = arena.add_identifier(1, 2, "a");
    let value = arena.add_identifier(4, 5, "b");
    let prop = arena.add_property(
        1,
        5,
        PropertyData {
            key,
            value,
            computed: false,
            shorthand: false,
        },
    );
    let rest_arg = arena.add_identifier(10, 11, "c");
    let rest = arena.add_rest_element(7, 11, RestElementData { argument: rest_arg });
    let object = arena.add_binding_pattern(
        SyntaxKind::ObjectPattern,
        0,
        12,
        BindingPatternData {
            elements: NodeList::from(vec![prop, rest]),
        },
    );

    match arena.data_at(object) {
        Some(NodeData::ObjectPattern(data)) => assert_eq!(data.elements.nodes, vec![prop, rest]),
        other => panic!("expected object pattern, got {other:?}"),
    }
    match arena.data_at(prop) {
        Some(NodeData::Property(data)) => assert_eq!(data.value, value),
        other => panic!("expected property, got {other:?}"),
    }
    match arena.data_at(rest) {
        Some(NodeData::RestElement(data)) => assert_eq!(data.argument, rest_arg),
        other => panic!("expected rest element, got {other:?}"),
    }
    assert_eq!(arena.get_parent(value), prop);
    assert_eq!(arena.get_parent(prop), object);
}

#[test]
fn test_opaque_nodes_keep_their_type_name() {
    let mut arena = NodeArena::new();
    let member = arena.add_opaque(0, 3, "MemberExpression");
    let node = arena.get(member).unwrap();
    assert_eq!(node.kind, SyntaxKind::Unknown);
    assert_eq!(arena.type_name(node), "MemberExpression");
    assert!(matches!(arena.data(node), NodeData::Opaque(_)));
}

#[test]
fn test_header_without_payload_is_empty_view() {
    let mut arena = NodeArena::new();
    arena
        .nodes
        .push(Node::with_data(SyntaxKind::ArrayPattern, 0, 0, Node::NO_DATA));
    arena.parents.push(NodeIndex::NONE);
    assert_eq!(
        arena.data_at(NodeIndex(0)),
        Some(NodeData::Empty(SyntaxKind::ArrayPattern))
    );
}

#[test]
fn test_out_of_range_handle_does_not_resolve() {
    let arena = NodeArena::new();
    assert!(arena.get(NodeIndex(3)).is_none());
    assert!(arena.data_at(NodeIndex::NONE).is_none());
    assert_eq!(arena.get_parent(NodeIndex(3)), NodeIndex::NONE);
}

#[test]
fn test_clear_resets_every_pool() {
    let mut arena = NodeArena::with_capacity(8);
    let local = arena.add_identifier(7, 9, "ns");
    arena.add_specifier(
        SyntaxKind::ImportNamespaceSpecifier,
        2,
        9,
        SpecifierData {
            imported: NodeIndex::NONE,
            local,
        },
    );
    assert_eq!(arena.len(), 2);

    arena.clear();
    assert!(arena.is_empty());
    assert!(arena.specifiers.is_empty());
    assert!(arena.interner.is_empty());
}

#[test]
fn test_syntax_kind_round_trips_estree_names() {
    for kind in [
        SyntaxKind::Identifier,
        SyntaxKind::ArrayPattern,
        SyntaxKind::ObjectPattern,
        SyntaxKind::RestElement,
        SyntaxKind::ImportNamespaceSpecifier,
    ] {
        assert_eq!(SyntaxKind::from_estree_type(kind.as_estree_type()), kind);
    }
    assert_eq!(
        SyntaxKind::from_estree_type("MemberExpression"),
        SyntaxKind::Unknown
    );
}
