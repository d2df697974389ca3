//! # Namescan - Python variable-name extraction
//!
//! Pulls every variable-binding identifier out of parsed Python source,
//! paired with the syntax node that introduced it.
//!
//! Namescan provides:
//! - A closed node-kind model over the tree-sitter-python grammar
//! - A recursive extractor for assignment targets, function parameters,
//!   and loop targets
//! - File and directory scanning with gitignore-aware filtering
//!
//! The extracted (name, node) pairs are the input for naming-convention
//! checkers; evaluating rules against the names is out of scope here.

pub mod config;
pub mod extract;
pub mod ignore;
pub mod kind;
pub mod scan;
pub mod source;
pub mod ui;
pub mod walk;

// Re-exports for convenient access
pub use extract::{Binding, extract_all_variable_names};
pub use kind::NodeKind;
pub use scan::BindingRecord;
pub use source::ParsedSource;

/// Result type alias for namescan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for namescan operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Grammar error: {0}")]
    Grammar(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
