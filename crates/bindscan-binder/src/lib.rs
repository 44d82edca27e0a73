//! Ordered extraction of the identifiers a binding pattern introduces.
//!
//! Works on declarator targets, function parameters, assignment targets and
//! import declarations. Results are handles to the identifier nodes of the
//! caller's arena, in source order (left to right, outer to inner).

pub mod pattern_walker;
pub use pattern_walker::PatternWalker;

use bindscan_ast::{NodeArena, NodeIndex, lower_estree};
use bindscan_common::InvalidInputError;
use serde_json::Value;

/// Collect the identifiers bound by `root`, appending to `into` when given.
///
/// `into` is consumed and handed back with the new entries after the existing
/// ones. On error it is dropped; use [`collect_assigned_identifiers`] to keep
/// ownership of the accumulator across a failing call.
pub fn get_assigned_identifiers(
    arena: &NodeArena,
    root: NodeIndex,
    into: Option<Vec<NodeIndex>>,
) -> Result<Vec<NodeIndex>, InvalidInputError> {
    let mut identifiers = into.unwrap_or_default();
    PatternWalker::new(arena).walk(root, &mut identifiers)?;
    Ok(identifiers)
}

/// Append the identifiers bound by `root` to a caller-owned accumulator.
///
/// Root validation runs before anything is appended, so `out` is unchanged on error.
pub fn collect_assigned_identifiers(
    arena: &NodeArena,
    root: NodeIndex,
    out: &mut Vec<NodeIndex>,
) -> Result<(), InvalidInputError> {
    PatternWalker::new(arena).walk(root, out)
}

/// Names of the identifiers bound by `root`, in binding order.
pub fn get_assigned_identifier_names(
    arena: &NodeArena,
    root: NodeIndex,
) -> Result<Vec<&str>, InvalidInputError> {
    let identifiers = get_assigned_identifiers(arena, root, None)?;
    Ok(identifiers
        .into_iter()
        .filter_map(|idx| arena.get_identifier_text(idx))
        .collect())
}

/// Lower an ESTree node and collect the identifiers it binds.
///
/// The returned handles index into the returned arena.
pub fn assigned_identifiers_from_estree(
    node: &Value,
) -> Result<(NodeArena, Vec<NodeIndex>), InvalidInputError> {
    let (arena, root) = lower_estree(node)?;
    let identifiers = get_assigned_identifiers(&arena, root, None)?;
    Ok((arena, identifiers))
}

/// Names bound by an ESTree node, e.g. `["a", "c", "x", "d"]` for the
/// declarator target of `var { a, b: [ c,, ...x ], d } = whatever()`.
pub fn assigned_names_from_estree(node: &Value) -> Result<Vec<String>, InvalidInputError> {
    let (arena, identifiers) = assigned_identifiers_from_estree(node)?;
    Ok(identifiers
        .into_iter()
        .filter_map(|idx| arena.get_identifier_text(idx))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
#[path = "tests/pattern_walker_unit_tests.rs"]
mod pattern_walker_unit_tests;
