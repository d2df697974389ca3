//! Parse boundary
//!
//! Wraps the external tree-sitter-python parser. Everything downstream of
//! this module treats the tree as a read-only structure.

use tree_sitter::{Node, Parser, Tree};

use crate::extract::{Binding, extract_all_variable_names};
use crate::{Error, Result};

/// A Python source buffer together with its parsed tree.
pub struct ParsedSource {
    content: String,
    tree: Tree,
}

impl ParsedSource {
    /// Parse Python source text.
    ///
    /// tree-sitter recovers from malformed input with ERROR nodes, so this
    /// only fails if the grammar cannot be loaded or the parser bails out
    /// entirely.
    pub fn parse(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| Error::Grammar(format!("Failed to load Python grammar: {}", e)))?;

        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| Error::Parse("Parser produced no tree".to_string()))?;

        Ok(Self { content, tree })
    }

    /// Root node of the parsed tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The source text the tree was parsed from.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// All variable bindings in the tree, in the extractor's group order.
    pub fn bindings(&self) -> Vec<Binding<'_>> {
        extract_all_variable_names(self.root(), &self.content)
    }
}
