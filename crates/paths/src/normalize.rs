//! Absolute-path normalization and ancestor queries.

use std::path::{Component, Path, PathBuf};

use crate::PathError;

/// Converts a user-supplied path string to an absolute, lexically
/// normalized form.
///
/// Relative input is resolved against the current working directory;
/// `.` and `..` segments are folded without touching the filesystem.
pub fn to_absolute_path(raw: &str) -> Result<PathBuf, PathError> {
    let path = Path::new(raw);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(PathError::CurrentDir)?
            .join(path)
    };
    Ok(normalize_lexically(&absolute))
}

/// As [`to_absolute_path`], with trailing separators stripped first so
/// `"/a/b/"` and `"/a/b"` normalize identically.
pub fn to_absolute_dir_path(raw: &str) -> Result<PathBuf, PathError> {
    to_absolute_path(strip_trailing_separators(raw))
}

/// Strips any number of trailing directory separators.
///
/// A bare root collapses to a single separator rather than an empty
/// string. Only separators of the host platform are stripped; on Unix a
/// backslash is an ordinary filename byte and stays untouched.
pub fn strip_trailing_separators(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(|c| c == '/' || (cfg!(windows) && c == '\\'));
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Returns whether `ancestor` is a strict ancestor of `descendant`.
///
/// Walks the descendant's parent chain comparing resolved identities, so
/// two different string forms of the same physical directory compare
/// equal. A path is never its own ancestor.
pub fn is_ancestor_of(ancestor: &Path, descendant: &Path) -> bool {
    let ancestor = resolve(ancestor);
    let descendant = resolve(descendant);

    let mut current = descendant.as_path();
    while let Some(parent) = current.parent() {
        if parent == ancestor {
            return true;
        }
        current = parent;
    }
    false
}

/// Resolves a path to a comparable identity: `canonicalize` when the path
/// exists, absolute lexical normalization otherwise.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    normalize_lexically(&absolute)
}

/// Folds `.` and `..` components without consulting the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(std::path::MAIN_SEPARATOR_STR);
    }
    normalized
}
