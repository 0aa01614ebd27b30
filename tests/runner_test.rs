use std::path::Path;
use tempfile::TempDir;

use xiv_translation_cleaner::cleaner::{self, Outcome, Selection, COMPLETION_MARKER};

/// Game folder with an empty exd/ directory
fn game_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("exd")).unwrap();
    dir
}

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join("exd").join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_missing_target_aborts_with_single_entry() {
    let dir = game_dir();
    write(dir.path(), "present.bin", b"x");
    let missing = dir.path().join("not-a-game");

    let report = cleaner::run(&missing, &["present.bin", "other.bin"]);

    assert_eq!(report.entries.len(), 1);
    assert!(matches!(report.entries[0].outcome, Outcome::TargetMissing { .. }));
    assert!(!report.completed);
    assert!(!report.log_lines().contains(&COMPLETION_MARKER.to_string()));
    assert!(dir.path().join("exd/present.bin").exists());
}

#[test]
fn test_missing_entry_reports_not_found() {
    let dir = game_dir();
    write(dir.path(), "keep.bin", b"x");

    let report = cleaner::run(dir.path(), &["missing.bin"]);

    assert_eq!(report.entries.len(), 1);
    assert!(matches!(report.entries[0].outcome, Outcome::NotFound { .. }));
    assert!(report.entries[0].log_line().starts_with("❌ "));
    assert!(report.completed);
    assert!(dir.path().join("exd/keep.bin").exists());
}

#[test]
fn test_present_file_is_deleted() {
    let dir = game_dir();
    write(dir.path(), "present.bin", b"translation");

    let report = cleaner::run(dir.path(), &["present.bin"]);

    assert!(!dir.path().join("exd/present.bin").exists());
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.successes(), 1);
    assert_eq!(report.bytes_freed(), 11);
}

#[test]
fn test_directory_is_deleted_recursively() {
    let dir = game_dir();
    write(dir.path(), "dirA/one.exd", b"1");
    write(dir.path(), "dirA/nested/two.exd", b"22");

    let report = cleaner::run(dir.path(), &["dirA"]);

    assert!(!dir.path().join("exd/dirA").exists());
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].outcome, Outcome::Success { bytes_freed: 3 });
    assert!(dir.path().join("exd").exists());
}

#[test]
fn test_second_run_reports_not_found() {
    let dir = game_dir();
    write(dir.path(), "a.bin", b"a");
    write(dir.path(), "dirB/b.bin", b"b");
    let items = ["a.bin", "dirB"];

    let first = cleaner::run(dir.path(), &items);
    assert_eq!(first.successes(), 2);

    let second = cleaner::run(dir.path(), &items);
    assert_eq!(second.successes(), 0);
    assert!(second
        .entries
        .iter()
        .all(|e| matches!(e.outcome, Outcome::NotFound { .. })));
    assert!(second.completed);
}

#[test]
fn test_failure_does_not_stop_later_entries() {
    let dir = game_dir();
    write(dir.path(), "first.bin", b"1");
    write(dir.path(), "third.bin", b"3");

    let report = cleaner::run(dir.path(), &["first.bin", "second.bin", "third.bin"]);

    let names: Vec<_> = report.entries.iter().map(|e| e.item_name.as_str()).collect();
    assert_eq!(names, vec!["first.bin", "second.bin", "third.bin"]);
    assert_eq!(report.successes(), 2);
    assert_eq!(report.failures(), 1);

    let lines = report.log_lines();
    assert_eq!(lines[0], "✅ Deleted: first.bin (1 B)");
    assert_eq!(lines[2], "✅ Deleted: third.bin (1 B)");
    assert_eq!(lines.iter().rev().nth(1).unwrap(), COMPLETION_MARKER);
}

#[test]
fn test_parent_dir_entry_is_rejected() {
    let dir = game_dir();
    std::fs::write(dir.path().join("outside.bin"), b"keep me").unwrap();

    let report = cleaner::run(dir.path(), &["../outside.bin"]);

    assert!(matches!(report.entries[0].outcome, Outcome::Rejected { .. }));
    assert!(dir.path().join("outside.bin").exists());
}

#[test]
fn test_parent_dir_within_exd_is_followed() {
    let dir = game_dir();
    write(dir.path(), "warp/w.exd", b"w");
    write(dir.path(), "b.bin", b"bb");

    let report = cleaner::run(dir.path(), &["warp/../b.bin"]);

    assert_eq!(report.entries[0].outcome, Outcome::Success { bytes_freed: 2 });
    assert!(!dir.path().join("exd/b.bin").exists());
    assert!(dir.path().join("exd/warp/w.exd").exists());
}

#[test]
fn test_absolute_entry_resolves_under_exd() {
    let dir = game_dir();
    write(dir.path(), "abs.bin", b"x");

    let report = cleaner::run(dir.path(), &["/abs.bin"]);

    assert_eq!(report.successes(), 1);
    assert!(!dir.path().join("exd/abs.bin").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_unlinked_not_emptied() {
    let dir = game_dir();
    let real = dir.path().join("real");
    std::fs::create_dir_all(&real).unwrap();
    std::fs::write(real.join("data.bin"), b"precious").unwrap();
    std::os::unix::fs::symlink(&real, dir.path().join("exd/link")).unwrap();

    let report = cleaner::run(dir.path(), &["link"]);

    assert_eq!(report.successes(), 1);
    assert!(std::fs::symlink_metadata(dir.path().join("exd/link")).is_err());
    assert!(real.join("data.bin").exists());
}

#[test]
fn test_selection_limits_what_is_deleted() {
    let dir = game_dir();
    write(dir.path(), "warp", b"w");
    write(dir.path(), "emote", b"e");

    let mut selection = Selection::new(vec!["warp".into(), "emote".into()]);
    selection.toggle(1);
    let report = cleaner::run(dir.path(), &selection.selected());

    assert_eq!(report.entries.len(), 1);
    assert!(!dir.path().join("exd/warp").exists());
    assert!(dir.path().join("exd/emote").exists());
}

#[test]
fn test_dry_run_changes_nothing() {
    let dir = game_dir();
    write(dir.path(), "dirA/one.exd", b"1");
    write(dir.path(), "file.bin", b"12");

    let plan = cleaner::plan(dir.path(), &["dirA", "file.bin", "gone"]);

    assert_eq!(plan.deletable().count(), 2);
    assert_eq!(plan.total_bytes(), 3);
    assert!(dir.path().join("exd/dirA/one.exd").exists());
    assert!(dir.path().join("exd/file.bin").exists());
}
