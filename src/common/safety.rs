use std::path::{Component, Path, PathBuf};

use super::errors::CleanError;

/// Subdirectory of the target folder that holds translation data.
/// Every entry must resolve somewhere beneath it.
pub const DATA_DIR: &str = "exd";

/// Directory that entries are joined against
pub fn data_root(target_folder: &Path) -> PathBuf {
    target_folder.join(DATA_DIR)
}

/// Resolve an entry to its path under `<target_folder>/exd/`.
///
/// Root and drive prefixes are stripped so an absolute entry still lands
/// under `exd/`, `.` components are dropped, and `..` pops the previous
/// component. An entry whose `..` would climb above `exd/` is rejected.
pub fn resolve_entry(target_folder: &Path, entry: &str) -> Result<PathBuf, CleanError> {
    let reject = |reason: &str| CleanError::ItemRejected {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let mut relative = PathBuf::new();
    for component in Path::new(entry).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return Err(reject("entry points outside the exd folder"));
                }
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(reject("entry is empty"));
    }

    Ok(data_root(target_folder).join(relative))
}
