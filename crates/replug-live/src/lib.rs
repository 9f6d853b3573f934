//! Staging and live-reload lifecycle engine for replug.
//!
//! This crate turns a catalog of addon source locations into live code
//! inside a running host session: it stages each source into the host's
//! addon directory (destructive replace), evicts the previously-imported
//! module state for that identity, and asks the host runtime to activate
//! it. A durable recovery ledger covers host restarts that happen while
//! the catalog itself only lives in session memory.
//!
//! # Architecture
//!
//! The engine never talks to a concrete host application. The embedding
//! layer supplies three seams: a [`HostRuntime`] that can activate,
//! deactivate, and report addon status; a [`ModuleRegistry`] over the
//! host's table of imported module names; and a [`LedgerStore`] holding
//! one durable string. [`LiveSession`] owns a catalog plus those
//! collaborators and performs every operation synchronously on the
//! caller's thread.
//!
//! # Example
//!
//! ```ignore
//! use replug_core::StageConfig;
//! use replug_live::LiveSession;
//!
//! let config = StageConfig::new(host_addons_dir);
//! let mut session = LiveSession::new(config, host, modules, store);
//!
//! session.recover_on_start()?;
//! let module = session.add("/dev/plugins/my_addon")?;
//! session.reload_all()?;
//! ```

mod host;
mod session;
mod stage;

pub use host::{AddonStatus, HostRuntime, LedgerStore, ModuleRegistry};
pub use session::{LiveSession, UnloadOutcome};
pub use stage::{clear_target, stage};
