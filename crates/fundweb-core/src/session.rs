//! Donor session context
//!
//! The login flow (outside this surface) persists a donor identity blob;
//! the transaction history screen only ever reads it. The store is a trait
//! so tests can substitute a fixed identity instead of touching the
//! filesystem.

use fundweb_client::DonorIdentity;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Session store reference type
pub type SessionRef = Arc<dyn SessionStore>;

/// Trait for reading the current donor identity
pub trait SessionStore: Send + Sync {
    /// The currently logged-in donor, if any
    ///
    /// Absence is a recoverable guard condition ("please log in"), never an
    /// error.
    fn current_donor(&self) -> Option<DonorIdentity>;
}

/// Session store backed by a JSON file on disk
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn current_donor(&self) -> Option<DonorIdentity> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("no donor session at {}: {}", self.path.display(), e);
                return None;
            }
        };

        // A corrupt blob degrades to "not logged in", same as a missing one
        match serde_json::from_str(&raw) {
            Ok(donor) => Some(donor),
            Err(e) => {
                debug!("unreadable donor session at {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

// ==================== Tests ====================
