//! Error types for lifecycle operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for lifecycle operations.
pub type LiveResult<T> = Result<T, LiveError>;

/// Errors that can occur while managing addons under development.
#[derive(Debug, Error)]
pub enum LiveError {
    /// The location is already tracked by the catalog.
    #[error("Addon already tracked: {location}")]
    DuplicateEntry { location: PathBuf },

    /// The host already has an addon active under this module identity.
    #[error("Addon '{module}' is already active in the host")]
    AlreadyLoaded { module: String },

    /// A catalog index beyond the current number of entries.
    #[error("Index {index} out of range (catalog holds {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The host runtime refused to activate a staged addon.
    ///
    /// The catalog entry stays recorded so the user can fix the source
    /// and reload without re-adding it.
    #[error("Host failed to activate '{module}': {message}")]
    Activation { module: String, message: String },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LiveError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an activation error from a host-reported message.
    pub fn activation(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Activation {
            module: module.into(),
            message: message.into(),
        }
    }
}
