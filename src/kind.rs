//! Node-kind model
//!
//! The extractor dispatches on a fixed set of grammar shapes. Everything
//! tree-sitter-python can produce is folded into this closed set, with
//! `Other` as the explicit arm for constructs that bind nothing.

use tree_sitter::Node;

/// Grammar shapes the binding extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A plain name (`identifier`)
    Name,
    /// `a = 1`, including the nested form chained assignments parse into
    Assignment,
    /// `a: int = 1` - an assignment carrying a type annotation
    AnnAssignment,
    /// `*rest` inside a destructuring target
    Starred,
    /// A tuple destructuring target, parenthesized or not
    Sequence,
    /// `def`, sync or async
    FuncDef,
    /// `for` statement, sync or async
    For,
    /// Anything else; never produces a binding
    Other,
}

impl NodeKind {
    /// Classify a tree-sitter node.
    ///
    /// The grammar reuses the `assignment` kind for annotated assignments,
    /// so that split is made on the presence of the `type` field.
    pub fn of(node: Node<'_>) -> Self {
        match node.kind() {
            "identifier" => NodeKind::Name,
            "assignment" => {
                if node.child_by_field_name("type").is_some() {
                    NodeKind::AnnAssignment
                } else {
                    NodeKind::Assignment
                }
            }
            "pattern_list" | "tuple_pattern" | "tuple" => NodeKind::Sequence,
            "list_splat_pattern" | "list_splat" => NodeKind::Starred,
            "function_definition" => NodeKind::FuncDef,
            "for_statement" => NodeKind::For,
            _ => NodeKind::Other,
        }
    }

    /// Get the string representation of the node kind
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Name => "name",
            NodeKind::Assignment => "assignment",
            NodeKind::AnnAssignment => "annotated-assignment",
            NodeKind::Starred => "starred",
            NodeKind::Sequence => "sequence",
            NodeKind::FuncDef => "function-definition",
            NodeKind::For => "for-loop",
            NodeKind::Other => "other",
        }
    }

    /// True for both assignment shapes.
    pub fn is_assignment(&self) -> bool {
        matches!(self, NodeKind::Assignment | NodeKind::AnnAssignment)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ParsedSource;
    use crate::walk::preorder;

    fn kinds_in(source: &str) -> Vec<NodeKind> {
        let parsed = ParsedSource::parse(source).expect("parse");
        preorder(parsed.root())
            .map(NodeKind::of)
            .filter(|k| *k != NodeKind::Other)
            .collect()
    }

    #[test]
    fn test_assignment_split_on_annotation() {
        let parsed = ParsedSource::parse("x = 1\ny: int = 2\n").expect("parse");
        let kinds: Vec<NodeKind> = preorder(parsed.root())
            .filter(|n| n.kind() == "assignment")
            .map(NodeKind::of)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Assignment, NodeKind::AnnAssignment]);
    }

    #[test]
    fn test_non_binding_constructs_are_other() {
        // augmented assignment, calls, and attribute access all fall through
        assert!(kinds_in("x += 1").iter().all(|k| *k == NodeKind::Name));
        assert!(kinds_in("foo(bar)").iter().all(|k| *k == NodeKind::Name));
    }

    #[test]
    fn test_loop_and_funcdef_kinds() {
        let kinds = kinds_in("def f():\n    pass\nfor i in it:\n    pass\n");
        assert!(kinds.contains(&NodeKind::FuncDef));
        assert!(kinds.contains(&NodeKind::For));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(NodeKind::AnnAssignment.to_string(), "annotated-assignment");
        assert_eq!(NodeKind::Other.as_str(), "other");
    }
}
