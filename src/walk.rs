//! Generic preorder traversal over tree-sitter nodes.

use tree_sitter::{Node, TreeCursor};

/// Iterator over a node and all of its descendants.
///
/// The cursor is scoped to the subtree it was created from, so the walk
/// stops at the starting node's boundary.
pub struct Preorder<'tree> {
    cursor: TreeCursor<'tree>,
    done: bool,
}

/// Walk `node` and every node beneath it.
///
/// The order is deterministic: a node is yielded before its children,
/// siblings left to right.
pub fn preorder(node: Node<'_>) -> Preorder<'_> {
    Preorder {
        cursor: node.walk(),
        done: false,
    }
}

impl<'tree> Iterator for Preorder<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.cursor.node();
        if !self.cursor.goto_first_child() {
            loop {
                if self.cursor.goto_next_sibling() {
                    break;
                }
                if !self.cursor.goto_parent() {
                    self.done = true;
                    break;
                }
            }
        }
        Some(current)
    }
}
