//! Core types for replug.
//!
//! This crate provides the fundamental data structures used throughout
//! the replug workspace: addon identity derivation, the in-session
//! catalog, the recovery-ledger codec, and staging configuration.

mod catalog;
mod config;
mod error;
mod identity;
mod ledger;

pub use catalog::{AddonEntry, Catalog};
pub use config::{StageConfig, StageConfigBuilder};
pub use error::{LiveError, LiveResult};
pub use identity::{normalize_location, AddonIdentity};
pub use ledger::{RecoveryLedger, LEDGER_SEPARATOR};
