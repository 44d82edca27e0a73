//! Collection of the identifiers a binding pattern assigns.
//!
//! Given `var { a: [b, ...c], d } = xyz`, walking the declarator's `id`
//! yields the nodes for `b`, `c` and `d`, in that order.
//!
//! The root handle is validated; everything beneath it is walked permissively.
//! A child of a kind that cannot bind a name (member expressions in assignment
//! targets, opaque nodes, dangling handles) contributes nothing.

use bindscan_ast::{NodeArena, NodeData, NodeIndex};
use bindscan_common::InvalidInputError;
use tracing::{debug, trace};

/// Depth-first, left-to-right walker over one arena.
#[derive(Clone, Copy, Debug)]
pub struct PatternWalker<'a> {
    arena: &'a NodeArena,
}

impl<'a> PatternWalker<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        PatternWalker { arena }
    }

    /// Append every identifier bound under `root` to `out`.
    ///
    /// Existing entries of `out` are left in place. If `root` does not name a
    /// node of this arena nothing is appended.
    #[tracing::instrument(level = "debug", skip(self, root, out), fields(root = root.0))]
    pub fn walk(
        &self,
        root: NodeIndex,
        out: &mut Vec<NodeIndex>,
    ) -> Result<(), InvalidInputError> {
        self.check_root(root)?;

        let before = out.len();
        self.collect(root, out);
        debug!(found = out.len() - before, "collected assigned identifiers");
        Ok(())
    }

    fn check_root(&self, root: NodeIndex) -> Result<(), InvalidInputError> {
        if root.is_none() {
            return Err(InvalidInputError::MissingNode);
        }
        if self.arena.get(root).is_none() {
            return Err(InvalidInputError::DanglingIndex {
                index: root.0,
                len: self.arena.len(),
            });
        }
        Ok(())
    }

    fn collect(&self, idx: NodeIndex, out: &mut Vec<NodeIndex>) {
        let Some(mut node) = self.arena.get(idx) else {
            return;
        };
        let mut idx = idx;

        // `...x` binds whatever its argument binds, so `[...[a, b]]` still destructures.
        if let Some(rest) = self.arena.get_rest_element(node) {
            idx = rest.argument;
            let Some(argument) = self.arena.get(idx) else {
                return;
            };
            node = argument;
        }

        match self.arena.data(node) {
            NodeData::Identifier(_) => out.push(idx),
            NodeData::ArrayPattern(pattern) => {
                for &elem in &pattern.elements.nodes {
                    // `[x,,y]` leaves a hole
                    if elem.is_none() {
                        continue;
                    }
                    self.collect(elem, out);
                }
            }
            NodeData::ObjectPattern(pattern) => {
                for &entry in &pattern.elements.nodes {
                    self.collect_object_entry(entry, out);
                }
            }
            // The default value is an expression, never a binding.
            NodeData::AssignmentPattern(assign) => self.collect(assign.left, out),
            NodeData::ImportDeclaration(import) => {
                for &spec in &import.specifiers.nodes {
                    self.collect(spec, out);
                }
            }
            // The local name is the binding, not the exported one.
            NodeData::ImportSpecifier(_, spec) => self.collect(spec.local, out),
            NodeData::RestElement(_)
            | NodeData::Property(_)
            | NodeData::Literal(_)
            | NodeData::Opaque(_)
            | NodeData::Empty(_) => {
                trace!(
                    idx = idx.0,
                    kind = self.arena.type_name(node),
                    "no bindings under node"
                );
            }
        }
    }

    /// An object-pattern entry is either `key: value` or `...rest`.
    fn collect_object_entry(&self, entry: NodeIndex, out: &mut Vec<NodeIndex>) {
        let Some(node) = self.arena.get(entry) else {
            return;
        };
        match self.arena.data(node) {
            // Only the destination binds; the key names the source property.
            NodeData::Property(prop) => self.collect(prop.value, out),
            NodeData::RestElement(_) => self.collect(entry, out),
            _ => trace!(
                idx = entry.0,
                kind = self.arena.type_name(node),
                "not an object-pattern entry"
            ),
        }
    }
}
