//! The live session: catalog mutation with synchronous lifecycle effects.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use replug_core::{
    normalize_location, AddonEntry, AddonIdentity, Catalog, LiveError, LiveResult, RecoveryLedger,
    StageConfig,
};

use crate::host::{HostRuntime, LedgerStore, ModuleRegistry};
use crate::stage;

/// What an unload found to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnloadOutcome {
    /// The host deactivated the addon.
    Deactivated,
    /// The host reported the identity neither enabled nor loaded;
    /// informational, nothing was done.
    NotLoaded,
}

/// One editing session's view of the addons under development.
///
/// Owns the catalog and the host collaborators; every operation runs
/// synchronously to completion on the caller's thread. After each
/// recoverable catalog mutation the recovery ledger is regenerated in
/// full from the catalog's locations.
pub struct LiveSession<H, M, S> {
    config: StageConfig,
    catalog: Catalog,
    host: H,
    modules: M,
    store: S,
}

impl<H, M, S> LiveSession<H, M, S>
where
    H: HostRuntime,
    M: ModuleRegistry,
    S: LedgerStore,
{
    /// Create a session with an empty catalog.
    pub fn new(config: StageConfig, host: H, modules: M, store: S) -> Self {
        Self::with_catalog(config, Catalog::new(), host, modules, store)
    }

    /// Create a session around a catalog reconstructed by the host's
    /// session-persistence layer.
    pub fn with_catalog(config: StageConfig, catalog: Catalog, host: H, modules: M, store: S) -> Self {
        Self {
            config,
            catalog,
            host,
            modules,
            store,
        }
    }

    /// The tracked addons, in insertion order.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The host runtime collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host runtime collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The module registry collaborator.
    pub fn modules(&self) -> &M {
        &self.modules
    }

    /// Mutable access to the module registry collaborator.
    pub fn modules_mut(&mut self) -> &mut M {
        &mut self.modules
    }

    /// The ledger store collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Track a new addon location and load it.
    ///
    /// Rejects locations already in the catalog and module identities
    /// the host already has active outside this session. The entry is
    /// recorded before loading, so an activation failure leaves it in
    /// place for a fix-and-reload cycle. Returns the module identity.
    pub fn add(&mut self, location: impl Into<PathBuf>) -> LiveResult<String> {
        let location = normalize_location(&location.into());

        if self.catalog.contains(&location) {
            return Err(LiveError::DuplicateEntry { location });
        }

        let identity = AddonIdentity::from_location(&location);
        if self.host.status(&identity.module).active() {
            return Err(LiveError::AlreadyLoaded {
                module: identity.module,
            });
        }

        self.catalog.insert(AddonEntry::new(location.clone()))?;
        let module = self.load(&location)?;
        info!(module = %module, "tracking new addon");
        Ok(module)
    }

    /// Stop tracking the entry at `index`.
    ///
    /// An enabled entry is unloaded before it leaves the catalog;
    /// removal without teardown is not allowed.
    pub fn remove(&mut self, index: usize) -> LiveResult<AddonEntry> {
        let entry = self.catalog.entry(index)?.clone();
        if entry.enabled {
            self.unload(&entry.location)?;
        }

        let removed = self.catalog.remove(index)?;
        self.sync_ledger();
        info!(location = %removed.location.display(), "stopped tracking addon");
        Ok(removed)
    }

    /// Set the enabled flag, performing the load or unload synchronously.
    ///
    /// Enabling always performs a full load (re-copy, purge, activate)
    /// rather than a bare host activation: the on-disk source may have
    /// changed while the addon was disabled. Re-applying the current
    /// value is harmless since load is idempotent per identity and
    /// unload no-ops when nothing is active.
    pub fn set_enabled(&mut self, index: usize, value: bool) -> LiveResult<()> {
        let location = self.catalog.entry(index)?.location.clone();
        self.catalog.set_flag(index, value)?;

        if value {
            self.load(&location)?;
        } else {
            self.unload(&location)?;
        }
        Ok(())
    }

    /// Tear down and rebuild a single entry, then refresh the host.
    pub fn reload(&mut self, index: usize) -> LiveResult<String> {
        let location = self.catalog.entry(index)?.location.clone();

        self.unload(&location)?;
        let module = self.load(&location)?;
        self.refresh_host();
        Ok(module)
    }

    /// Tear down and rebuild every enabled entry in catalog order.
    ///
    /// Entries are independent; no inter-addon load ordering beyond
    /// catalog insertion order is modeled.
    pub fn reload_all(&mut self) -> LiveResult<()> {
        let locations: Vec<PathBuf> = self
            .catalog
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.location.clone())
            .collect();

        for location in locations {
            self.unload(&location)?;
            self.load(&location)?;
        }

        self.refresh_host();
        Ok(())
    }

    /// Drain the recovery ledger, then replay the catalog.
    ///
    /// Invoked once per host process start, after the external
    /// persistence layer has reconstructed the catalog. Every location
    /// the previous process left in the ledger is unloaded best-effort
    /// (a not-loaded reply is expected for most of them), every enabled
    /// catalog entry is loaded, and the ledger is rewritten to mirror
    /// the current catalog.
    pub fn recover_on_start(&mut self) -> LiveResult<()> {
        let ledger = RecoveryLedger::decode(&self.store.read());
        for location in ledger.locations().to_vec() {
            match self.unload(&location) {
                Ok(UnloadOutcome::Deactivated) => {
                    info!(location = %location.display(), "unloaded leftover addon from previous session");
                }
                Ok(UnloadOutcome::NotLoaded) => {}
                Err(e) => {
                    warn!(location = %location.display(), error = %e, "leftover unload failed");
                }
            }
        }

        let enabled: Vec<PathBuf> = self
            .catalog
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.location.clone())
            .collect();
        for location in enabled {
            self.load(&location)?;
        }

        self.sync_ledger();
        Ok(())
    }

    /// Stage, purge, and activate an addon by source location.
    ///
    /// The staged target is cleared and re-copied, every cached module
    /// belonging to this identity is evicted from the registry, and the
    /// host activates the module. Activation failure propagates uncaught;
    /// a broken addon must surface loudly. Returns the module identity.
    pub fn load(&mut self, location: &Path) -> LiveResult<String> {
        let identity = AddonIdentity::from_location(location);
        let target = self.config.staged_path(&identity.staged_name);

        let bytes = stage::stage(location, &target)?;
        debug!(module = %identity.module, bytes, "staged addon");

        self.purge_modules(&identity);
        self.host.activate(&identity.module)?;
        self.sync_ledger();

        info!(module = %identity.module, "addon activated");
        Ok(identity.module)
    }

    /// Deactivate an addon by source location.
    ///
    /// Staged files and registry state are left alone; the next load
    /// cleans them up. Unloading something the host reports inactive is
    /// an informational no-op, never an error.
    pub fn unload(&mut self, location: &Path) -> LiveResult<UnloadOutcome> {
        let identity = AddonIdentity::from_location(location);

        if !self.host.status(&identity.module).active() {
            info!(module = %identity.module, "addon not loaded, nothing to unload");
            return Ok(UnloadOutcome::NotLoaded);
        }

        self.host.deactivate(&identity.module)?;
        info!(module = %identity.module, "addon deactivated");
        Ok(UnloadOutcome::Deactivated)
    }

    /// Rewrite the recovery ledger from the full catalog.
    ///
    /// Always a full regeneration, never an incremental patch.
    pub fn sync_ledger(&mut self) {
        let ledger = RecoveryLedger::from_locations(self.catalog.locations());
        self.store.write(&ledger.encode());
    }

    /// Evict every registry module belonging to an identity.
    ///
    /// Removes `module` itself and every qualified name under
    /// `module.`. Without this, reactivation would run against the code
    /// objects cached by the previous activation.
    fn purge_modules(&mut self, identity: &AddonIdentity) {
        let prefix = identity.submodule_prefix();

        let mut names = self.modules.module_names();
        names.sort();

        for name in names {
            if name == identity.module || name.starts_with(&prefix) {
                debug!(module = %name, "evicting cached module");
                self.modules.remove_module(&name);
            }
        }
    }

    fn refresh_host(&mut self) {
        if self.config.refresh_after_reload {
            self.host.refresh();
        }
    }
}
