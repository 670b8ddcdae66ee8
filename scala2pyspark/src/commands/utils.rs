//! Shared utilities for command implementations.

use crate::constants::{DEFAULT_EXCLUDE_FOLDERS, SCALA_EXTENSION};
use std::path::{Path, PathBuf};

/// Check if a folder name matches an exclusion entry (`name` or `*.suffix`).
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| {
        if let Some(suffix) = exclude.strip_prefix('*') {
            exclude.starts_with("*.") && name.ends_with(suffix)
        } else {
            name == exclude
        }
    })
}

/// Collect `.scala` files under `root`, respecting `.gitignore` and skipping
/// excluded folders. A file path is returned as-is regardless of extension.
pub fn collect_scala_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut all_excludes: Vec<String> = exclude.to_vec();
    all_excludes.extend(DEFAULT_EXCLUDE_FOLDERS.iter().map(|&s| s.to_owned()));
    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_exclude(true)
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !is_excluded(name, &all_excludes))
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && path.extension().is_some_and(|ext| ext == SCALA_EXTENSION)
                {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => log::warn!("walk error: {e}"),
        }
    }
    // Walk order is filesystem dependent.
    files.sort();
    files
}

/// Collect files for every root, in argument order.
pub fn find_scala_files(roots: &[PathBuf], exclude: &[String]) -> Vec<PathBuf> {
    roots
        .iter()
        .flat_map(|root| collect_scala_files(root, exclude))
        .collect()
}
