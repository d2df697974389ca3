//! File and directory scanning
//!
//! Reads Python files, runs the extractor over each, and flattens the
//! results into plain serializable records for output.

use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::ignore::IgnoreFilter;
use crate::source::ParsedSource;

/// One extracted binding, located for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct BindingRecord {
    /// The bound identifier
    pub name: String,
    /// File the binding was found in
    pub path: String,
    /// 1-indexed line of the origin node
    pub line: u32,
    /// 1-indexed column of the origin node
    pub column: u32,
}

/// File extensions treated as Python source.
pub const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi"];

/// Check whether a path looks like a Python file.
pub fn is_python_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PYTHON_EXTENSIONS.contains(&ext))
}

/// Extract all bindings from a single file.
pub fn scan_file(path: &Path) -> Result<Vec<BindingRecord>> {
    let content = std::fs::read_to_string(path)?;
    let parsed = ParsedSource::parse(content)?;
    let display = path.display().to_string();

    Ok(parsed
        .bindings()
        .into_iter()
        .map(|binding| BindingRecord {
            name: binding.name.to_string(),
            path: display.clone(),
            line: binding.node.start_position().row as u32 + 1,
            column: binding.node.start_position().column as u32 + 1,
        })
        .collect())
}

/// Walk a file or directory and extract bindings from every Python file.
///
/// Files that fail to read or parse are logged and skipped; the scan keeps
/// going. Per-file record groups concatenate in walk order, which is sorted
/// for determinism.
pub fn scan_path(path: &Path, extra_excludes: Option<&[String]>) -> Result<Vec<BindingRecord>> {
    // surfaces NotFound for paths the walker would silently skip
    if std::fs::metadata(path)?.is_file() {
        return scan_file(path);
    }

    let filter = IgnoreFilter::new(path, extra_excludes);
    let mut records = Vec::new();

    let walk = ignore::WalkBuilder::new(path)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walk.filter_map(|e| e.ok()) {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let entry_path = entry.path();
        if filter.is_ignored(entry_path, false) || !is_python_file(entry_path) {
            continue;
        }
        match scan_file(entry_path) {
            Ok(mut found) => {
                tracing::debug!("{}: {} bindings", entry_path.display(), found.len());
                records.append(&mut found);
            }
            Err(e) => {
                tracing::error!("Failed to scan {}: {}", entry_path.display(), e);
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_python_file() {
        assert!(is_python_file(Path::new("app.py")));
        assert!(is_python_file(Path::new("stubs/app.pyi")));
        assert!(!is_python_file(Path::new("app.rs")));
        assert!(!is_python_file(Path::new("Makefile")));
    }

    #[test]
    fn test_scan_file_records_and_positions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("app.py");
        fs::write(&file, "x = 1\n\ndef f(a):\n    y = 2\n").expect("write");

        let records = scan_file(&file).expect("scan");
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "a"]);

        assert_eq!((records[0].line, records[0].column), (1, 1));
        assert_eq!((records[1].line, records[1].column), (4, 5));
        assert_eq!((records[2].line, records[2].column), (3, 7));
    }

    #[test]
    fn test_scan_path_skips_noise_and_non_python() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("app.py"), "x = 1\n").expect("write");
        fs::write(dir.path().join("notes.txt"), "x = 1\n").expect("write");
        fs::create_dir(dir.path().join("__pycache__")).expect("mkdir");
        fs::write(dir.path().join("__pycache__").join("junk.py"), "y = 2\n").expect("write");

        let records = scan_path(dir.path(), None).expect("scan");
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["x"]);
    }

    #[test]
    fn test_scan_path_applies_extra_excludes() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("keep.py"), "kept = 1\n").expect("write");
        fs::create_dir(dir.path().join("skipme")).expect("mkdir");
        fs::write(dir.path().join("skipme").join("other.py"), "dropped = 1\n").expect("write");

        let excludes = vec!["skipme/".to_string()];
        let records = scan_path(dir.path(), Some(&excludes)).expect("scan");
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_scan_path_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(scan_path(&dir.path().join("nope"), None).is_err());
    }

    #[test]
    fn test_scan_path_on_single_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("one.py");
        fs::write(&file, "a, b = 1, 2\n").expect("write");

        let records = scan_path(&file, None).expect("scan");
        assert_eq!(records.len(), 2);
    }
}
