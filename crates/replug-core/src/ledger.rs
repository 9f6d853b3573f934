//! Recovery-ledger codec.
//!
//! The ledger is the only durable state the core depends on: a flat list
//! of addon locations serialized as one delimited string in the host
//! configuration store. It is read once at process start to force-unload
//! whatever a previous, possibly unclean, session left active, and fully
//! regenerated from the catalog after every recoverable mutation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Separator between locations in the encoded ledger string.
pub const LEDGER_SEPARATOR: char = '|';

/// Locations to force-unload at the next process start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryLedger {
    locations: Vec<PathBuf>,
}

impl RecoveryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a list of locations.
    pub fn from_locations(locations: Vec<PathBuf>) -> Self {
        Self { locations }
    }

    /// Encode as a single string; the empty ledger encodes as `""`.
    pub fn encode(&self) -> String {
        self.locations
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(&LEDGER_SEPARATOR.to_string())
    }

    /// Decode an encoded ledger string.
    ///
    /// The empty string is the "no entries" sentinel and decodes to an
    /// empty ledger, not to one empty location.
    pub fn decode(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::new();
        }
        Self {
            locations: raw.split(LEDGER_SEPARATOR).map(PathBuf::from).collect(),
        }
    }

    /// Locations in ledger order.
    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    /// Whether the ledger lists nothing.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
