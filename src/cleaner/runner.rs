use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::report::{DeletionReport, Outcome, ReportEntry};
use crate::common::errors::CleanError;
use crate::common::safety;

/// Delete every entry under `<target_folder>/exd/`, in order.
///
/// The run is best-effort: a failing entry is recorded and the next one is
/// attempted. Nothing is retried and nothing is rolled back. If the target
/// folder itself is missing, no entry is attempted at all.
pub fn run<S: AsRef<str>>(target_folder: &Path, items: &[S]) -> DeletionReport {
    run_with_progress(target_folder, items, |_| {})
}

/// Same as [`run`], calling `on_entry` after each entry is processed
pub fn run_with_progress<S, F>(target_folder: &Path, items: &[S], mut on_entry: F) -> DeletionReport
where
    S: AsRef<str>,
    F: FnMut(&ReportEntry),
{
    if let Err(err) = check_target(target_folder) {
        tracing::warn!(folder = %target_folder.display(), "target folder missing, nothing deleted");
        return DeletionReport::aborted(target_folder.to_path_buf(), &err);
    }

    tracing::info!(
        folder = %target_folder.display(),
        entries = items.len(),
        "starting deletion run"
    );

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let name = item.as_ref();
        let resolved = safety::resolve_entry(target_folder, name);
        let path = resolved.as_ref().ok().cloned();

        let outcome = match resolved.and_then(|p| delete_entry(&p)) {
            Ok(bytes_freed) => {
                tracing::info!(entry = name, bytes_freed, "deleted");
                Outcome::Success { bytes_freed }
            }
            Err(err) => {
                tracing::warn!(entry = name, error = %err, "entry not deleted");
                Outcome::from_error(&err)
            }
        };

        let entry = ReportEntry {
            item_name: name.to_string(),
            path,
            outcome,
        };
        on_entry(&entry);
        entries.push(entry);
    }

    tracing::info!("deletion run complete");

    DeletionReport {
        target_folder: target_folder.to_path_buf(),
        entries,
        completed: true,
    }
}

/// Only a definite "does not exist" aborts the run; other stat failures
/// fall through to the per-entry checks.
pub fn check_target(target_folder: &Path) -> Result<(), CleanError> {
    match std::fs::metadata(target_folder) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CleanError::TargetMissing {
            path: target_folder.to_path_buf(),
        }),
        _ => Ok(()),
    }
}

/// Delete a single resolved entry, returning the bytes it occupied
fn delete_entry(path: &Path) -> Result<u64, CleanError> {
    // symlink_metadata so a linked directory is unlinked, not emptied
    let meta = std::fs::symlink_metadata(&path).map_err(|e| CleanError::ItemStat {
        path: path.to_path_buf(),
        source: e,
    })?;

    if meta.is_dir() {
        let size = dir_size(path);
        std::fs::remove_dir_all(path).map_err(|e| delete_error(path, e))?;
        Ok(size)
    } else {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(meta.len()),
            // Windows directory symlinks and junctions only go with remove_dir
            Err(e) if meta.file_type().is_symlink() => std::fs::remove_dir(path)
                .map(|()| meta.len())
                .map_err(|_| delete_error(path, e)),
            Err(e) => Err(delete_error(path, e)),
        }
    }
}

fn delete_error(path: &Path, source: std::io::Error) -> CleanError {
    CleanError::ItemDelete {
        path: PathBuf::from(path),
        source,
    }
}

/// Total size of regular files beneath a directory
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.metadata().map(|m| m.len()).unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn game_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("exd")).unwrap();
        dir
    }

    #[test]
    fn test_check_target() {
        let dir = game_dir();
        assert!(check_target(dir.path()).is_ok());
        assert!(matches!(
            check_target(&dir.path().join("missing")),
            Err(CleanError::TargetMissing { .. })
        ));
        assert!(check_target(Path::new("")).is_err());
    }

    #[test]
    fn test_dir_size_counts_nested_files() {
        let dir = game_dir();
        let root = dir.path().join("exd/addon");
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("a.exd"), vec![0u8; 100]).unwrap();
        std::fs::write(root.join("sub/b.exd"), vec![0u8; 50]).unwrap();
        assert_eq!(dir_size(&root), 150);
    }

    #[test]
    fn test_progress_callback_sees_every_entry() {
        let dir = game_dir();
        std::fs::write(dir.path().join("exd/a.bin"), b"x").unwrap();

        let mut seen = Vec::new();
        let report = run_with_progress(dir.path(), &["a.bin", "b.bin"], |e| {
            seen.push(e.item_name.clone())
        });
        assert_eq!(seen, vec!["a.bin", "b.bin"]);
        assert_eq!(report.successes(), 1);
    }

    #[test]
    fn test_delete_entry_takes_resolved_path() {
        let dir = game_dir();
        let path = dir.path().join("exd/emote.exd");
        std::fs::write(&path, vec![0u8; 7]).unwrap();

        assert_eq!(delete_entry(&path).unwrap(), 7);
        assert!(!path.exists());
        assert!(matches!(
            delete_entry(&path),
            Err(CleanError::ItemStat { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_removed() {
        let dir = game_dir();
        let link = dir.path().join("exd/stale");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert!(delete_entry(&link).is_ok());
        assert!(std::fs::symlink_metadata(&link).is_err());
    }

    #[test]
    fn test_success_reports_file_size() {
        let dir = game_dir();
        std::fs::write(dir.path().join("exd/root.exl"), vec![1u8; 42]).unwrap();
        let report = run(dir.path(), &["root.exl"]);
        assert_eq!(
            report.entries[0].outcome,
            Outcome::Success { bytes_freed: 42 }
        );
    }
}
