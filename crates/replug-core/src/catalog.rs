//! The in-session addon catalog.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LiveError, LiveResult};

/// A tracked addon source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonEntry {
    /// Filesystem path to the addon folder or single script file.
    ///
    /// Immutable once inserted; remove and re-add to change it.
    pub location: PathBuf,

    /// Whether the addon should currently be loaded.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl AddonEntry {
    /// Create an enabled entry for a location.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            enabled: true,
        }
    }
}

/// Ordered list of addons tracked by the current editing session.
///
/// Insertion order is meaningful only for display; entries are never
/// implicitly reordered. At most one entry exists per location. The
/// catalog is session state, not the durable store; it is discarded when
/// the session ends and the recovery ledger covers restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<AddonEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, rejecting duplicates by location.
    ///
    /// Rejection leaves the catalog untouched.
    pub fn insert(&mut self, entry: AddonEntry) -> LiveResult<()> {
        if self.contains(&entry.location) {
            return Err(LiveError::DuplicateEntry {
                location: entry.location,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> LiveResult<AddonEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Get the entry at `index`.
    pub fn entry(&self, index: usize) -> LiveResult<&AddonEntry> {
        self.check_index(index)?;
        Ok(&self.entries[index])
    }

    /// Set the enabled flag at `index`, returning the previous value.
    ///
    /// Pure flag write; the lifecycle side effects of toggling live in
    /// the session layer.
    pub fn set_flag(&mut self, index: usize, enabled: bool) -> LiveResult<bool> {
        self.check_index(index)?;
        let previous = self.entries[index].enabled;
        self.entries[index].enabled = enabled;
        Ok(previous)
    }

    /// Check whether a location is already tracked.
    pub fn contains(&self, location: &Path) -> bool {
        self.entries.iter().any(|e| e.location == location)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AddonEntry> {
        self.entries.iter()
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All tracked locations in catalog order, enabled or not.
    pub fn locations(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.location.clone()).collect()
    }

    fn check_index(&self, index: usize) -> LiveResult<()> {
        if index >= self.entries.len() {
            return Err(LiveError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_list() {
        let mut catalog = Catalog::new();
        catalog.insert(AddonEntry::new("/dev/plugins/foo")).unwrap();
        catalog.insert(AddonEntry::new("/dev/plugins/bar")).unwrap();

        assert_eq!(catalog.len(), 2);
        let locations = catalog.locations();
        assert_eq!(locations[0], PathBuf::from("/dev/plugins/foo"));
        assert_eq!(locations[1], PathBuf::from("/dev/plugins/bar"));
    }

    #[test]
    fn test_duplicate_location_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(AddonEntry::new("/dev/plugins/foo")).unwrap();

        let err = catalog
            .insert(AddonEntry::new("/dev/plugins/foo"))
            .unwrap_err();
        assert!(matches!(err, LiveError::DuplicateEntry { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut catalog = Catalog::new();
        let err = catalog.remove(0).unwrap_err();
        assert!(matches!(
            err,
            LiveError::IndexOutOfRange { index: 0, len: 0 }
        ));
    }

    #[test]
    fn test_set_flag_returns_previous() {
        let mut catalog = Catalog::new();
        catalog.insert(AddonEntry::new("/dev/plugins/foo")).unwrap();

        assert!(catalog.set_flag(0, false).unwrap());
        assert!(!catalog.set_flag(0, false).unwrap());
        assert!(!catalog.entry(0).unwrap().enabled);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.insert(AddonEntry::new("/a")).unwrap();
        catalog.insert(AddonEntry::new("/b")).unwrap();
        catalog.insert(AddonEntry::new("/c")).unwrap();

        let removed = catalog.remove(1).unwrap();
        assert_eq!(removed.location, PathBuf::from("/b"));
        assert_eq!(catalog.locations(), vec![PathBuf::from("/a"), PathBuf::from("/c")]);
    }
}
