//! Facade tying the locator and the forest deleter together, plus
//! scratch-directory reset.

use std::path::Path;
use std::time::Instant;

use crate::{SweepConfig, SweepError, delete_subtree, delete_subtrees, locate_output_folders};

/// Locates `*.out` folders under `root` and deletes them as a forest.
///
/// Returns the overall verdict; per-folder detail goes to the tracing
/// stream. Errors only on caller mistakes (unresolvable or unreadable
/// `root`), never on individual deletion failures.
pub async fn delete_output_folders(
    root: &str,
    recursive: bool,
    config: &SweepConfig,
) -> Result<bool, SweepError> {
    let root = outsweep_paths::to_absolute_dir_path(root)?;
    let started = Instant::now();

    let folders = locate_output_folders(&root, recursive)?;
    let success = delete_subtrees(&folders, config).await;

    tracing::info!(
        root = %root.display(),
        folders = folders.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        success,
        "output folder sweep finished"
    );
    Ok(success)
}

/// Resets a scratch directory: deletes it if present, then recreates it
/// empty.
pub async fn recreate_directory(path: &Path, config: &SweepConfig) -> Result<(), SweepError> {
    if path.exists() && !delete_subtree(path, config).await {
        return Err(SweepError::SubtreeNotDeleted(path.to_path_buf()));
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_config() -> SweepConfig {
        SweepConfig {
            timeout: Duration::from_millis(500),
            backoff: Duration::from_millis(20),
        }
    }

    #[tokio::test]
    async fn sweep_deletes_matching_folders() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir(root.join("a.out")).unwrap();
        std::fs::create_dir(root.join("b.out")).unwrap();
        std::fs::write(root.join("b.out").join("x.txt"), "x").unwrap();
        std::fs::create_dir(root.join("src")).unwrap();

        let ok = delete_output_folders(root.to_str().unwrap(), false, &fast_config())
            .await
            .unwrap();

        assert!(ok);
        assert!(!root.join("a.out").exists());
        assert!(!root.join("b.out").exists());
        assert!(root.join("src").exists());
    }

    #[tokio::test]
    async fn sweep_with_no_matches_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let ok = delete_output_folders(tmp.path().to_str().unwrap(), true, &fast_config())
            .await
            .unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn sweep_missing_root_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("no_such_root");
        let result =
            delete_output_folders(missing.to_str().unwrap(), false, &fast_config()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn sweep_accepts_trailing_separator() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir(root.join("a.out")).unwrap();

        let raw = format!("{}/", root.display());
        let ok = delete_output_folders(&raw, false, &fast_config())
            .await
            .unwrap();

        assert!(ok);
        assert!(!root.join("a.out").exists());
    }

    #[tokio::test]
    async fn recreate_directory_empties_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let scratch = tmp.path().join("scratch");
        std::fs::create_dir_all(scratch.join("old")).unwrap();
        std::fs::write(scratch.join("old").join("stale.txt"), "stale").unwrap();

        recreate_directory(&scratch, &fast_config()).await.unwrap();

        assert!(scratch.exists());
        assert_eq!(std::fs::read_dir(&scratch).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn recreate_directory_creates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let scratch = tmp.path().join("fresh");

        recreate_directory(&scratch, &fast_config()).await.unwrap();

        assert!(scratch.is_dir());
    }
}
