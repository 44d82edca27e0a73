//! ESTree binding-pattern nodes for bindscan.
//!
//! This crate provides the node taxonomy the walker reads:
//! - `SyntaxKind` - ESTree node kinds that can appear in binding position
//! - `NodeIndex` / `NodeList` - handles into the arena
//! - `NodeArena` - thin node headers plus typed data pools
//! - `NodeData` - a borrowed, per-kind view of a node's payload
//! - `estree` - lowering of ESTree JSON (acorn, espree, meriyah) into an arena

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::{Node, NodeArena, NodeData};

mod node_access;
mod node_arena;

pub mod estree;
pub use estree::lower_estree;

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;
