//! Addon identity derivation.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Names derived from an addon's source location.
///
/// `module` is the name the host runtime and its module registry use to
/// address the addon. `staged_name` is the literal final path segment,
/// used as the on-disk name inside the host addons directory; script
/// addons keep their extension there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonIdentity {
    /// Module name: directory base name, or file stem for scripts.
    pub module: String,
    /// Literal base name, extension preserved.
    pub staged_name: String,
}

impl AddonIdentity {
    /// Derive both names from a source location.
    ///
    /// A location that does not exist on disk is treated as a script
    /// path. Stripping the extension of an extension-less directory name
    /// is a no-op, so identities recovered from the ledger after the
    /// source vanished still come out right for package addons.
    pub fn from_location(location: &Path) -> Self {
        let staged_name = base_name(location);
        let module = if location.is_dir() {
            staged_name.clone()
        } else {
            location
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        Self {
            module,
            staged_name,
        }
    }

    /// Qualified-name prefix that all submodules of this addon share.
    pub fn submodule_prefix(&self) -> String {
        format!("{}.", self.module)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Normalize a location before it enters the catalog.
///
/// Resolves `.` and `..` components lexically, without touching the
/// filesystem. Equal-looking locations must compare equal for the
/// catalog's duplicate check to hold.
pub fn normalize_location(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
