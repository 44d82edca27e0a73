//! Node kinds.
//!
//! Only the ESTree kinds that matter in binding position get their own
//! variant. Everything else a parser may put there (member expressions,
//! TypeScript parameter properties, future proposals) is `Unknown`, and the
//! opaque node keeps the original `type` string.

use serde::Serialize;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    Unknown = 0,
    Identifier,
    Literal,
    ArrayPattern,
    ObjectPattern,
    Property,
    RestElement,
    AssignmentPattern,
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
}

impl SyntaxKind {
    /// Map an ESTree `type` string to a kind.
    pub fn from_estree_type(type_name: &str) -> SyntaxKind {
        match type_name {
            "Identifier" => SyntaxKind::Identifier,
            "Literal" => SyntaxKind::Literal,
            "ArrayPattern" => SyntaxKind::ArrayPattern,
            "ObjectPattern" => SyntaxKind::ObjectPattern,
            "Property" => SyntaxKind::Property,
            "RestElement" => SyntaxKind::RestElement,
            "AssignmentPattern" => SyntaxKind::AssignmentPattern,
            "ImportDeclaration" => SyntaxKind::ImportDeclaration,
            "ImportSpecifier" => SyntaxKind::ImportSpecifier,
            "ImportDefaultSpecifier" => SyntaxKind::ImportDefaultSpecifier,
            "ImportNamespaceSpecifier" => SyntaxKind::ImportNamespaceSpecifier,
            _ => SyntaxKind::Unknown,
        }
    }

    /// The ESTree `type` string for this kind. `Unknown` has none.
    pub fn as_estree_type(self) -> &'static str {
        match self {
            SyntaxKind::Unknown => "",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::Literal => "Literal",
            SyntaxKind::ArrayPattern => "ArrayPattern",
            SyntaxKind::ObjectPattern => "ObjectPattern",
            SyntaxKind::Property => "Property",
            SyntaxKind::RestElement => "RestElement",
            SyntaxKind::AssignmentPattern => "AssignmentPattern",
            SyntaxKind::ImportDeclaration => "ImportDeclaration",
            SyntaxKind::ImportSpecifier => "ImportSpecifier",
            SyntaxKind::ImportDefaultSpecifier => "ImportDefaultSpecifier",
            SyntaxKind::ImportNamespaceSpecifier => "ImportNamespaceSpecifier",
        }
    }

    /// Array or object destructuring pattern.
    pub fn is_binding_pattern(self) -> bool {
        matches!(self, SyntaxKind::ArrayPattern | SyntaxKind::ObjectPattern)
    }

    /// One of the three import specifier flavours.
    pub fn is_import_specifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::ImportSpecifier
                | SyntaxKind::ImportDefaultSpecifier
                | SyntaxKind::ImportNamespaceSpecifier
        )
    }
}
