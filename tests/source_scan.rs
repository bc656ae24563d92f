use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use devloop::errors::DevloopError;
use devloop::source::{SourceFilter, SourceIndex};
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

fn write_tree(root: &Path, files: &[&str]) -> std::io::Result<()> {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "// content\n")?;
    }
    Ok(())
}

fn scan_set(index: &SourceIndex) -> Result<BTreeSet<PathBuf>, DevloopError> {
    Ok(index.scan()?.into_iter().collect())
}

fn rs_filter(exclude: &[&str]) -> SourceFilter {
    let exclude: Vec<String> = exclude.iter().map(|p| p.to_string()).collect();
    SourceFilter::new(&["rs".to_string()], &exclude).expect("valid filter")
}

#[test]
fn scan_finds_tracked_extensions_recursively() -> TestResult {
    let dir = tempdir()?;
    write_tree(
        dir.path(),
        &[
            "main.rs",
            "nested/deep/module.rs",
            "notes.txt",
            "Makefile",
        ],
    )?;

    let index = SourceIndex::new(dir.path(), rs_filter(&[]));
    let found = scan_set(&index)?;

    let expected: BTreeSet<PathBuf> = ["main.rs", "nested/deep/module.rs"]
        .iter()
        .map(|rel| dir.path().join(rel))
        .collect();
    assert_eq!(found, expected);

    Ok(())
}

#[test]
fn exclude_globs_filter_scan_results() -> TestResult {
    let dir = tempdir()?;
    write_tree(
        dir.path(),
        &["main.rs", "gen/schema.rs", "gen/nested/extra.rs"],
    )?;

    let index = SourceIndex::new(dir.path(), rs_filter(&["gen/**"]));
    let found = scan_set(&index)?;

    let expected: BTreeSet<PathBuf> = [dir.path().join("main.rs")].into_iter().collect();
    assert_eq!(found, expected);

    Ok(())
}

#[test]
fn repeated_scans_of_an_unchanged_tree_agree() -> TestResult {
    let dir = tempdir()?;
    write_tree(dir.path(), &["a.rs", "b/c.rs", "b/d.rs"])?;

    let index = SourceIndex::new(dir.path(), rs_filter(&[]));
    assert_eq!(scan_set(&index)?, scan_set(&index)?);

    Ok(())
}

#[test]
fn scan_of_missing_root_fails_with_scan_error() -> TestResult {
    let dir = tempdir()?;
    let missing = dir.path().join("no-such-dir");

    let index = SourceIndex::new(&missing, rs_filter(&[]));
    let err = index.scan().unwrap_err();
    assert!(matches!(err, DevloopError::Scan { ref path, .. } if *path == missing));

    Ok(())
}

#[test]
fn files_without_extension_are_not_tracked() {
    let filter = rs_filter(&[]);
    assert!(filter.matches(Path::new("src/main.rs")));
    assert!(!filter.matches(Path::new("src/main")));
    assert!(!filter.matches(Path::new("Makefile")));
    assert!(!filter.matches(Path::new("src/main.py")));
}
