use serde::Serialize;
use std::path::{Path, PathBuf};

use super::runner::{check_target, dir_size};
use crate::common::safety;

/// What a deletion run would find at an entry's path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedKind {
    File,
    Directory,
    Missing,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedItem {
    pub name: String,
    pub path: Option<PathBuf>,
    pub kind: PlannedKind,
    pub size_bytes: u64,
}

/// Dry-run view of a deletion: inspects, never mutates
#[derive(Debug, Clone, Serialize)]
pub struct DeletionPlan {
    pub target_folder: PathBuf,
    pub target_exists: bool,
    pub items: Vec<PlannedItem>,
}

impl DeletionPlan {
    /// Entries that a real run would remove
    pub fn deletable(&self) -> impl Iterator<Item = &PlannedItem> {
        self.items
            .iter()
            .filter(|i| matches!(i.kind, PlannedKind::File | PlannedKind::Directory))
    }

    /// True when a real run would record no failures
    pub fn all_deletable(&self) -> bool {
        self.target_exists && self.deletable().count() == self.items.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.deletable().map(|i| i.size_bytes).sum()
    }
}

/// Inspect every entry the way `run` would, without deleting anything
pub fn plan<S: AsRef<str>>(target_folder: &Path, items: &[S]) -> DeletionPlan {
    if check_target(target_folder).is_err() {
        return DeletionPlan {
            target_folder: target_folder.to_path_buf(),
            target_exists: false,
            items: Vec::new(),
        };
    }

    let items = items
        .iter()
        .map(|item| plan_entry(target_folder, item.as_ref()))
        .collect();

    DeletionPlan {
        target_folder: target_folder.to_path_buf(),
        target_exists: true,
        items,
    }
}

fn plan_entry(target_folder: &Path, name: &str) -> PlannedItem {
    let path = match safety::resolve_entry(target_folder, name) {
        Ok(p) => p,
        Err(_) => {
            return PlannedItem {
                name: name.to_string(),
                path: None,
                kind: PlannedKind::Rejected,
                size_bytes: 0,
            }
        }
    };

    let (kind, size_bytes) = match std::fs::symlink_metadata(&path) {
        Ok(meta) if meta.is_dir() => (PlannedKind::Directory, dir_size(&path)),
        Ok(meta) => (PlannedKind::File, meta.len()),
        Err(_) => (PlannedKind::Missing, 0),
    };

    PlannedItem {
        name: name.to_string(),
        path: Some(path),
        kind,
        size_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plan_all_present() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("exd/warp")).unwrap();
        let plan = plan(dir.path(), &["warp"]);
        assert!(plan.all_deletable());
    }

    #[test]
    fn test_plan_classifies_entries() {
        let dir = TempDir::new().unwrap();
        let exd = dir.path().join("exd");
        std::fs::create_dir_all(exd.join("warp")).unwrap();
        std::fs::write(exd.join("warp/warp_0_en.exd"), vec![0u8; 64]).unwrap();
        std::fs::write(exd.join("root.exl"), vec![0u8; 8]).unwrap();

        let plan = plan(dir.path(), &["warp", "root.exl", "gone", "../x"]);
        let kinds: Vec<_> = plan.items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PlannedKind::Directory,
                PlannedKind::File,
                PlannedKind::Missing,
                PlannedKind::Rejected
            ]
        );
        assert_eq!(plan.total_bytes(), 72);
        assert_eq!(plan.deletable().count(), 2);
        assert!(!plan.all_deletable());

        // nothing was touched
        assert!(exd.join("warp/warp_0_en.exd").exists());
        assert!(exd.join("root.exl").exists());
    }

    #[test]
    fn test_plan_missing_target() {
        let dir = TempDir::new().unwrap();
        let plan = plan(&dir.path().join("nope"), &["a"]);
        assert!(!plan.target_exists);
        assert!(plan.items.is_empty());
        assert!(!plan.all_deletable());
    }
}
