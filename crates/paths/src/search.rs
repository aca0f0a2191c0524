//! Linear file search across an ordered list of directories.

use std::path::PathBuf;

/// Returns the full path of the first file named `name` found in
/// `search_paths`, scanning in order, or `None` when no directory
/// contains it.
pub fn find_file(name: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    search_paths
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
