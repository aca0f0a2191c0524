//! The deletion engine: single-file deletion, recursive subtree fan-out
//! and forest orchestration.

use std::path::{Path, PathBuf};
use std::time::Instant;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, join_all};

use crate::SweepConfig;

/// Attempts exactly one file removal.
///
/// Any failure (missing, permission denied, in use) is logged and
/// reported as a `false` outcome; it never propagates to the caller.
pub fn delete_file(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to delete file");
            false
        }
    }
}

/// Deletes everything under `path`, then `path` itself.
///
/// Child directories recurse concurrently with each other and with the
/// per-file deletions; the emptied directory is then removed under the
/// retry budget in `config`. The caller guarantees `path` exists.
/// Returns `true` only if every descendant and the final removal
/// succeeded.
pub async fn delete_subtree(path: &Path, config: &SweepConfig) -> bool {
    delete_subtree_inner(path.to_path_buf(), *config).await
}

fn delete_subtree_inner(path: PathBuf, config: SweepConfig) -> BoxFuture<'static, bool> {
    async move {
        let (dirs, files) = match list_children(&path) {
            Ok(children) => children,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to list directory");
                return false;
            }
        };

        let mut tasks = Vec::with_capacity(dirs.len() + files.len());
        for dir in dirs {
            tasks.push(tokio::spawn(delete_subtree_inner(dir, config)));
        }
        for file in files {
            tasks.push(tokio::spawn(async move { delete_file(&file) }));
        }

        let mut children_ok = true;
        for result in join_all(tasks).await {
            match result {
                Ok(ok) => children_ok &= ok,
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "deletion task panicked");
                    children_ok = false;
                }
            }
        }

        // A directory with a failed child is reported failed without an
        // extra removal attempt, which could only fail on not-empty.
        if !children_ok {
            return false;
        }

        remove_emptied_dir(&path, &config).await
    }
    .boxed()
}

/// Removes an emptied directory, retrying transient failures until
/// `config.timeout` of wall-clock time has elapsed.
///
/// `remove_dir` is deliberately non-recursive: content reappearing
/// concurrently must fail loudly here, not cascade into a second
/// recursive delete.
async fn remove_emptied_dir(path: &Path, config: &SweepConfig) -> bool {
    let started = Instant::now();
    loop {
        match std::fs::remove_dir(path) {
            Ok(()) => {}
            // Another actor already reached the goal state; the existence
            // probe below confirms and exits.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "directory removal failed, retrying");
            }
        }

        if !path.exists() {
            return true;
        }

        if started.elapsed() >= config.timeout {
            tracing::error!(path = %path.display(), "timed out deleting directory");
            return false;
        }

        tokio::time::sleep(config.backoff).await;
    }
}

/// Deletes a set of pairwise-disjoint directory trees concurrently.
///
/// Missing roots are skipped and count as satisfied. Every tree runs to
/// completion; a failure in one never cancels its siblings. Returns
/// `true` only if every existing root was fully deleted.
pub async fn delete_subtrees(paths: &[PathBuf], config: &SweepConfig) -> bool {
    let mut tasks = Vec::new();
    for path in paths {
        if !path.exists() {
            tracing::info!(path = %path.display(), "skipping missing folder");
            continue;
        }
        tracing::info!(path = %path.display(), "deleting folder");
        tasks.push(tokio::spawn(delete_subtree_inner(path.clone(), *config)));
    }

    // Join everything before folding, so sibling trees keep their partial
    // progress even when one of them fails.
    let mut all_ok = true;
    for result in join_all(tasks).await {
        match result {
            Ok(ok) => all_ok &= ok,
            Err(e) => {
                tracing::error!(error = %e, "deletion task panicked");
                all_ok = false;
            }
        }
    }
    all_ok
}

/// Non-recursive listing of a directory's immediate children, split into
/// directories and everything else. Symlinks land in the file bucket so
/// only the link itself is removed.
fn list_children(path: &Path) -> std::io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }

    Ok((dirs, files))
}
