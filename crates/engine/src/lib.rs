//! Concurrent, retrying deletion of build-output directory trees.
//!
//! Deletion on some platforms is neither atomic nor immediate: file-explorer
//! indexers and antivirus scanners hold handles briefly after a directory's
//! contents are gone. The engine fans out one task per child node, joins all
//! of them unconditionally, and retries the final empty-directory removal
//! under a wall-clock budget instead of failing on the first transient
//! error.

mod delete;
mod locate;
mod outputs;

pub use delete::{delete_file, delete_subtree, delete_subtrees};
pub use locate::{OUTPUT_SUFFIX, locate_output_folders};
pub use outputs::{delete_output_folders, recreate_directory};

use std::time::Duration;

/// Default wall-clock budget for removing one emptied directory.
pub const DELETE_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default pause between removal retries.
///
/// Long enough to outlast typical external-handle propagation, short
/// enough not to burn much of the overall timeout budget.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Retry policy threaded through every engine entry point.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Wall-clock budget for the final removal of one directory.
    pub timeout: Duration,
    /// Pause between removal retries.
    pub backoff: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            timeout: DELETE_TIMEOUT,
            backoff: RETRY_BACKOFF,
        }
    }
}

/// Errors produced by the engine's fallible entry points.
///
/// Expected per-node deletion failures are outcomes, not errors: they
/// surface through the returned booleans and the tracing stream.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Path(#[from] outsweep_paths::PathError),

    #[error("failed to delete directory tree: {}", .0.display())]
    SubtreeNotDeleted(std::path::PathBuf),
}
