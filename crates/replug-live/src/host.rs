//! Host collaborator traits.
//!
//! The session drives three external seams the embedding layer must
//! provide. None of them know about the catalog or the ledger format;
//! they only speak module identities and raw strings.

use replug_core::LiveResult;
use serde::{Deserialize, Serialize};

/// Enable/loaded state the host reports for a module identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonStatus {
    /// The addon is switched on in the host's preferences.
    pub enabled: bool,
    /// The addon's module has been imported into the running session.
    pub loaded: bool,
}

impl AddonStatus {
    /// Whether the host considers this identity active in any way.
    pub fn active(&self) -> bool {
        self.enabled || self.loaded
    }
}

/// The host application's addon runtime.
pub trait HostRuntime {
    /// Activate an addon by module identity.
    ///
    /// A host-side failure (for instance a syntax error in the staged
    /// addon) must surface as [`replug_core::LiveError::Activation`];
    /// the session propagates it uncaught.
    fn activate(&mut self, module: &str) -> LiveResult<()>;

    /// Deactivate an addon by module identity.
    fn deactivate(&mut self, module: &str) -> LiveResult<()>;

    /// Report the current state of a module identity.
    fn status(&self, module: &str) -> AddonStatus;

    /// Let the host re-scan its addon directory after batch operations.
    fn refresh(&mut self);
}

/// The host's table of currently-imported module identities.
///
/// The session enumerates this table and evicts entries by identity so a
/// reactivation never runs against code objects cached by the previous
/// activation.
pub trait ModuleRegistry {
    /// All currently-imported module names.
    fn module_names(&self) -> Vec<String>;

    /// Remove a module by name. Unknown names are a no-op.
    fn remove_module(&mut self, name: &str);
}

/// Durable single-string field in the host configuration.
///
/// Holds the encoded recovery ledger. Unlike the catalog it survives
/// session end and process restart.
pub trait LedgerStore {
    /// Read the stored string; an absent value reads as `""`.
    fn read(&self) -> String;

    /// Overwrite the stored string.
    fn write(&mut self, raw: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_active() {
        assert!(!AddonStatus::default().active());
        assert!(AddonStatus {
            enabled: true,
            loaded: false
        }
        .active());
        assert!(AddonStatus {
            enabled: false,
            loaded: true
        }
        .active());
    }
}
