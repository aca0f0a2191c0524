//! Locating build-output directories by naming convention.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::SweepError;

/// Directory-name suffix marking a build-output folder.
pub const OUTPUT_SUFFIX: &str = ".out";

/// Lists directories under `root` whose name ends in `.out`.
///
/// Only depth 1 is scanned unless `recursive` is set. The walk never
/// descends into a matched directory, so the returned set is pairwise
/// disjoint and safe to hand to [`delete_subtrees`](crate::delete_subtrees).
/// A nonexistent or unreadable `root` is a caller error and propagates.
pub fn locate_output_folders(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, SweepError> {
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        )
        .into());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(OUTPUT_SUFFIX) {
            found.push(entry.path().to_path_buf());
            walker.skip_current_dir();
        }
    }

    Ok(found)
}
