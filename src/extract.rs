//! Binding extraction
//!
//! Extracts every identifier a construct binds: assignment targets,
//! function parameters, and loop targets. Extraction is purely structural;
//! nothing here knows about scopes or types, and the tree is never touched.

use tree_sitter::Node;

use crate::kind::NodeKind;
use crate::walk::preorder;

/// A single extracted binding: the spelled identifier and the node that
/// introduced it.
///
/// Both fields borrow from the parsed tree and its source text, valid only
/// as long as the caller keeps those alive. Rebindings of the same name are
/// all kept; nothing is deduplicated.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    /// The bound identifier as spelled in source
    pub name: &'a str,
    /// The node to attribute diagnostics to
    pub node: Node<'a>,
}

impl<'a> Binding<'a> {
    fn from_name_node(node: Node<'a>, source: &'a str) -> Self {
        Self {
            name: node_text(node, source),
            node,
        }
    }
}

fn node_text<'a>(node: Node<'a>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Collect the name nodes bound by a target expression.
///
/// Recursive over the target shape: plain names yield themselves, sequence
/// and starred patterns recurse, anything else yields nothing.
pub fn extract_names_from_node<'a>(node: Node<'a>) -> Vec<Node<'a>> {
    match NodeKind::of(node) {
        NodeKind::Name => vec![node],
        NodeKind::Assignment => {
            let mut names = Vec::new();
            if let Some(target) = node.child_by_field_name("left") {
                names.extend(extract_names_from_node(target));
            }
            // `a = b = 1` parses with the next assignment in value position
            if let Some(value) = node.child_by_field_name("right") {
                if NodeKind::of(value).is_assignment() {
                    names.extend(extract_names_from_node(value));
                }
            }
            names
        }
        // the annotation itself is never inspected
        NodeKind::AnnAssignment => match node.child_by_field_name("left") {
            Some(target) => extract_names_from_node(target),
            None => Vec::new(),
        },
        NodeKind::Starred => match node.named_child(0) {
            Some(inner) => extract_names_from_node(inner),
            None => Vec::new(),
        },
        NodeKind::Sequence => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .flat_map(extract_names_from_node)
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Bindings introduced by an assignment or annotated assignment.
pub fn var_names_from_assignment<'a>(node: Node<'a>, source: &'a str) -> Vec<Binding<'a>> {
    extract_names_from_node(node)
        .into_iter()
        .map(|name| Binding::from_name_node(name, source))
        .collect()
}

/// Bindings introduced by a function definition's plain positional
/// parameters.
///
/// Keyword-only parameters, `*args`/`**kwargs`, and positional-only
/// parameters (declared before `/`) are not part of the plain list and are
/// skipped. The origin node is the parameter declaration itself.
pub fn var_names_from_funcdef<'a>(node: Node<'a>, source: &'a str) -> Vec<Binding<'a>> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut bindings = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "identifier" => bindings.push(Binding::from_name_node(param, source)),
            "typed_parameter" => match param.named_child(0) {
                Some(name) if name.kind() == "identifier" => bindings.push(Binding {
                    name: node_text(name, source),
                    node: param,
                }),
                // `*args: int` still opens the keyword-only tail
                Some(splat)
                    if matches!(
                        splat.kind(),
                        "list_splat_pattern" | "dictionary_splat_pattern"
                    ) =>
                {
                    break;
                }
                _ => {}
            },
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = param
                    .child_by_field_name("name")
                    .filter(|n| n.kind() == "identifier")
                {
                    bindings.push(Binding {
                        name: node_text(name, source),
                        node: param,
                    });
                }
            }
            // everything before `/` is positional-only
            "positional_separator" => bindings.clear(),
            // everything after `*`, `*args`, or `**kwargs` is keyword-only
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            _ => {}
        }
    }
    bindings
}

/// Bindings introduced by a loop target.
///
/// Single-level on purpose: a tuple target contributes only its direct name
/// elements, and nested destructuring contributes nothing.
pub fn var_names_from_for<'a>(node: Node<'a>, source: &'a str) -> Vec<Binding<'a>> {
    let Some(target) = node.child_by_field_name("left") else {
        return Vec::new();
    };
    match NodeKind::of(target) {
        NodeKind::Name => vec![Binding::from_name_node(target, source)],
        NodeKind::Sequence => {
            let mut cursor = target.walk();
            target
                .named_children(&mut cursor)
                .filter(|element| element.kind() == "identifier")
                .map(|element| Binding::from_name_node(element, source))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Every binding reachable from `root`: assignment targets first, then
/// function parameters, then loop targets, each group in tree order.
///
/// Downstream checkers depend on the group order, so it is part of the
/// contract rather than an artifact.
pub fn extract_all_variable_names<'a>(root: Node<'a>, source: &'a str) -> Vec<Binding<'a>> {
    let mut bindings = Vec::new();

    for node in preorder(root) {
        if NodeKind::of(node).is_assignment() && !is_chain_link(node) {
            bindings.extend(var_names_from_assignment(node, source));
        }
    }
    for node in preorder(root) {
        if NodeKind::of(node) == NodeKind::FuncDef {
            bindings.extend(var_names_from_funcdef(node, source));
        }
    }
    for node in preorder(root) {
        if NodeKind::of(node) == NodeKind::For {
            bindings.extend(var_names_from_for(node, source));
        }
    }

    bindings
}

// An assignment nested in the value position of another assignment is the
// tail of a chain; the outermost node already covers its targets.
fn is_chain_link(node: Node<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == "assignment")
}
