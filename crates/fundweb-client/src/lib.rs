//! HTTP client for the donation platform backend
//!
//! The backend exposes a plain REST surface consumed by the admin and donor
//! screens. This crate owns the wire-level record types, the
//! [`DonationBackend`] trait the screen stores are built against, and the
//! reqwest implementation of that trait.

use async_trait::async_trait;
use std::sync::Arc;

pub mod client;
pub mod error;
pub mod types;

pub use client::BackendClient;
pub use error::{ClientError, ClientResult};

// Re-export commonly used types
pub use types::{
    Campaign, Category, CreatorRecord, DonationRecord, DonorIdentity, NewCreator,
};

// ==================== Backend Trait ====================

/// Backend reference type
pub type BackendRef = Arc<dyn DonationBackend>;

/// Trait for the donation platform backend surface
///
/// The screens only ever perform these four operations; tests substitute
/// their own implementations.
#[async_trait]
pub trait DonationBackend: Send + Sync {
    /// Fetch the full creator collection
    async fn all_creators(&self) -> ClientResult<Vec<CreatorRecord>>;

    /// Register a new creator; returns the backend's success message
    async fn add_creator(&self, creator: &NewCreator) -> ClientResult<String>;

    /// Delete a creator by id
    async fn delete_creator(&self, id: u64) -> ClientResult<()>;

    /// Fetch all donations made by a donor
    async fn donations_by_donor(&self, donor_id: u64) -> ClientResult<Vec<DonationRecord>>;
}
