//! Path canonicalization, ancestor queries and ordered file search.
//!
//! Pure, synchronous helpers for callers that need to compare or resolve
//! user-supplied paths before handing them to the deletion engine.

mod normalize;
mod search;

pub use normalize::{
    is_ancestor_of, strip_trailing_separators, to_absolute_dir_path, to_absolute_path,
};
pub use search::find_file;

/// Errors produced while resolving paths.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
