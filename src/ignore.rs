//! Scan filtering
//!
//! Keeps generated and vendored Python out of scans: gitignore rules,
//! built-in noise patterns, and user-configured excludes.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

pub struct IgnoreFilter {
    inner: Gitignore,
}

impl IgnoreFilter {
    pub fn new(root: &Path, extra_excludes: Option<&[String]>) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        // 1. Load from .gitignore and .ignore
        builder.add(root.join(".gitignore"));
        builder.add(root.join(".ignore"));

        // 2. Python project noise
        let defaults = [
            "venv/",
            ".venv/",
            "__pycache__/",
            ".tox/",
            ".mypy_cache/",
            ".pytest_cache/",
            ".git/",
            "build/",
            "dist/",
            "*.egg-info/",
            "*.pyc",
            "*.pyo",
        ];

        for pattern in defaults {
            // static patterns, known valid
            builder.add_line(None, pattern).ok();
        }

        // 3. User-configured excludes
        if let Some(excludes) = extra_excludes {
            for pattern in excludes {
                builder.add_line(None, pattern).ok();
            }
        }

        Self {
            inner: builder.build().unwrap_or_else(|_| Gitignore::empty()),
        }
    }

    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.inner
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }
}
