//! Staging filesystem operations.
//!
//! Staging is a destructive replace: the target is removed entirely
//! before the source is copied, so a reload never merges stale files
//! into fresh ones. A crash mid-copy leaves a partial target that the
//! next stage corrects with the same clear-then-copy sequence.

use std::fs;
use std::path::Path;

use replug_core::{LiveError, LiveResult};

/// Remove a staged target, file or directory tree.
///
/// A missing target is a no-op.
pub fn clear_target(target: &Path) -> LiveResult<()> {
    if !target.exists() {
        return Ok(());
    }

    let result = if target.is_dir() {
        fs::remove_dir_all(target)
    } else {
        fs::remove_file(target)
    };

    result.map_err(|e| LiveError::io(target, e))
}

/// Copy a source into the staged target, replacing whatever was there.
///
/// Directories copy recursively, single files copy flat. Returns the
/// number of bytes copied.
pub fn stage(source: &Path, target: &Path) -> LiveResult<u64> {
    if !source.exists() {
        return Err(LiveError::NotFound {
            path: source.to_path_buf(),
        });
    }

    clear_target(target)?;

    if source.is_dir() {
        copy_dir_recursive(source, target)
    } else {
        copy_file(source, target)
    }
}

/// Copy a single file.
fn copy_file(source: &Path, dest: &Path) -> LiveResult<u64> {
    fs::copy(source, dest).map_err(|e| LiveError::io(source, e))
}

/// Recursively copy a directory.
fn copy_dir_recursive(source: &Path, dest: &Path) -> LiveResult<u64> {
    fs::create_dir_all(dest).map_err(|e| LiveError::io(dest, e))?;

    let mut total_bytes = 0u64;

    let entries = fs::read_dir(source).map_err(|e| LiveError::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| LiveError::io(source, e))?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if path.is_dir() {
            total_bytes += copy_dir_recursive(&path, &dest_path)?;
        } else {
            total_bytes += copy_file(&path, &dest_path)?;
        }
    }

    Ok(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_stage_single_file() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("tool.py");
        let target = tmp.path().join("addons").join("tool.py");
        write(&source, "print('hi')");
        fs::create_dir(tmp.path().join("addons")).unwrap();

        let bytes = stage(&source, &target).unwrap();
        assert_eq!(bytes, 11);
        assert_eq!(fs::read_to_string(&target).unwrap(), "print('hi')");
    }

    #[test]
    fn test_stage_directory_tree() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("my_addon");
        fs::create_dir_all(source.join("ui")).unwrap();
        write(&source.join("__init__.py"), "init");
        write(&source.join("ui").join("panel.py"), "panel");

        let target = tmp.path().join("addons").join("my_addon");
        stage(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(target.join("__init__.py")).unwrap(), "init");
        assert_eq!(
            fs::read_to_string(target.join("ui").join("panel.py")).unwrap(),
            "panel"
        );
    }

    #[test]
    fn test_stage_replaces_stale_target() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("my_addon");
        fs::create_dir(&source).unwrap();
        write(&source.join("__init__.py"), "new");

        // Stale copy with a file the new source no longer has.
        let target = tmp.path().join("addons").join("my_addon");
        fs::create_dir_all(&target).unwrap();
        write(&target.join("__init__.py"), "old");
        write(&target.join("removed_module.py"), "stale");

        stage(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(target.join("__init__.py")).unwrap(), "new");
        assert!(!target.join("removed_module.py").exists());
    }

    #[test]
    fn test_stage_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = stage(&tmp.path().join("gone"), &tmp.path().join("target")).unwrap_err();
        assert!(matches!(err, LiveError::NotFound { .. }));
    }

    #[test]
    fn test_clear_missing_target_is_noop() {
        let tmp = TempDir::new().unwrap();
        clear_target(&tmp.path().join("nothing")).unwrap();
    }
}
