//! Core screen state and business logic
//!
//! Both screens follow the same shape: load the collection from the
//! backend, render it, project it through a pure filter, and refetch after
//! every successful mutation. The in-memory list is always a projection of
//! the last successful fetch; nothing is ever spliced in locally.

pub mod error;
pub mod session;

use fundweb_client::{BackendRef, ClientError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::{Arc, RwLock};

pub use error::{CoreError, ErrorCode};
pub use session::{FileSessionStore, SessionRef, SessionStore};

// Re-export the record types so downstream crates take them from one place
pub use fundweb_client::{
    Campaign, Category, CreatorRecord, DonationRecord, DonorIdentity, NewCreator,
};

// ==================== Filter Projection ====================

/// Category selector for the creator filter
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CategoryFilter {
    /// Sentinel: every category matches
    #[default]
    All,
    /// Exact category match
    Only(Category),
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Free-text and category filter over the creator list
#[derive(Debug, Clone, Default)]
pub struct CreatorFilter {
    /// Case-insensitive substring matched against name, email, username,
    /// mobile, and location
    pub query: String,
    /// Category selector
    pub category: CategoryFilter,
}

impl CreatorFilter {
    /// Check whether a creator passes this filter
    ///
    /// An absent optional field never matches the query, but the record may
    /// still match through another field.
    pub fn matches(&self, creator: &CreatorRecord) -> bool {
        let query = self.query.to_lowercase();

        let matches_query = query.is_empty()
            || field_contains(Some(&creator.name), &query)
            || field_contains(creator.email.as_deref(), &query)
            || field_contains(creator.username.as_deref(), &query)
            || field_contains(creator.mobile.as_deref(), &query)
            || field_contains(creator.location.as_deref(), &query);

        let matches_category = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => creator.category == category,
        };

        matches_query && matches_category
    }
}

fn field_contains(field: Option<&str>, query: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(query))
        .unwrap_or(false)
}

/// Project the creator list through a filter
///
/// Pure and synchronous: the result is always a subset of the input, and
/// filtering an already-filtered list with the same filter is a no-op.
pub fn filter_creators(creators: &[CreatorRecord], filter: &CreatorFilter) -> Vec<CreatorRecord> {
    creators
        .iter()
        .filter(|creator| filter.matches(creator))
        .cloned()
        .collect()
}

// ==================== Mutate Then Reload ====================

/// Run a mutation and, only if it succeeds, refetch the collection
///
/// Both screens resynchronize this way instead of splicing the list
/// locally: the displayed list only changes after the backend round-trip
/// completes. A failed mutation leaves the list untouched and never
/// triggers the reload.
pub async fn mutate_then_reload<T, M, R>(mutation: M, reload: R) -> Result<T, CoreError>
where
    M: Future<Output = Result<T, ClientError>>,
    R: Future<Output = Result<(), CoreError>>,
{
    let value = mutation.await.map_err(|e| CoreError::Mutation {
        message: e.to_string(),
    })?;
    reload.await?;
    Ok(value)
}

/// Reject create payloads with blank required fields before they reach the
/// backend
pub fn validate_new_creator(creator: &NewCreator) -> Result<(), CoreError> {
    let required = [
        ("name", &creator.name),
        ("email", &creator.email),
        ("username", &creator.username),
        ("password", &creator.password),
        ("mobile number", &creator.mobile),
        ("location", &creator.location),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::Validation {
                message: format!("{} is required", field),
            });
        }
    }

    Ok(())
}

// ==================== Creator Directory ====================

/// In-memory creator list state
#[derive(Debug, Default)]
struct DirectoryData {
    creators: Vec<CreatorRecord>,
    error: Option<String>,
    loading: bool,
    loaded: bool,
}

/// Screen store for the admin creator directory
///
/// Holds the last successful fetch; reads are projections over it. The
/// outer lock in the API layer serializes loads, so at most one fetch is
/// in flight per screen.
pub struct CreatorDirectory {
    backend: BackendRef,
    data: RwLock<DirectoryData>,
}

impl CreatorDirectory {
    /// Create a new directory backed by the given backend
    pub fn new(backend: BackendRef) -> Self {
        Self {
            backend,
            data: RwLock::new(DirectoryData::default()),
        }
    }

    /// Fetch the full creator collection from the backend
    ///
    /// On success the in-memory list is replaced and any error cleared; on
    /// failure the list is left empty and an error message recorded.
    pub async fn load(&mut self) -> Result<(), CoreError> {
        {
            let mut data = self.data.write().unwrap();
            data.loading = true;
        }

        let result = self.backend.all_creators().await;

        let mut data = self.data.write().unwrap();
        data.loading = false;
        match result {
            Ok(creators) => {
                debug!("creator directory loaded: {} records", creators.len());
                data.creators = creators;
                data.error = None;
                data.loaded = true;
                Ok(())
            }
            Err(e) => {
                warn!("creator fetch failed: {}", e);
                data.creators.clear();
                data.loaded = false;
                data.error = Some(format!("Failed to fetch creators: {}", e));
                Err(CoreError::Fetch {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Get all creators from the last successful fetch
    pub fn creators(&self) -> Vec<CreatorRecord> {
        self.data.read().unwrap().creators.clone()
    }

    /// Project the creator list through a filter
    pub fn filter(&self, filter: &CreatorFilter) -> Vec<CreatorRecord> {
        let data = self.data.read().unwrap();
        filter_creators(&data.creators, filter)
    }

    /// Get a creator by id
    pub fn creator(&self, id: u64) -> Option<CreatorRecord> {
        let data = self.data.read().unwrap();
        data.creators.iter().find(|c| c.id == id).cloned()
    }

    /// Number of creators in the last successful fetch
    pub fn count(&self) -> usize {
        self.data.read().unwrap().creators.len()
    }

    /// Current error message, if any
    pub fn error(&self) -> Option<String> {
        self.data.read().unwrap().error.clone()
    }

    /// Whether a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        self.data.read().unwrap().loading
    }

    /// Whether at least one fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        self.data.read().unwrap().loaded
    }

    /// Delete a creator, then refetch the collection
    ///
    /// The displayed list only changes after the backend round-trip; a
    /// failed delete leaves it untouched and records an error message.
    pub async fn delete_creator(&mut self, id: u64) -> Result<(), CoreError> {
        let backend = Arc::clone(&self.backend);
        let result = mutate_then_reload(
            async move { backend.delete_creator(id).await },
            self.load(),
        )
        .await;

        if let Err(CoreError::Mutation { message }) = &result {
            let mut data = self.data.write().unwrap();
            data.error = Some(format!("Error deleting creator: {}", message));
        }

        result
    }

    /// Register a new creator, then refetch the collection
    ///
    /// Returns the backend's success message for display.
    pub async fn add_creator(&mut self, creator: NewCreator) -> Result<String, CoreError> {
        validate_new_creator(&creator)?;

        let backend = Arc::clone(&self.backend);
        mutate_then_reload(
            async move { backend.add_creator(&creator).await },
            self.load(),
        )
        .await
    }
}

// ==================== Donation History ====================

/// In-memory donation list state
#[derive(Debug, Default)]
struct HistoryData {
    donations: Vec<DonationRecord>,
    error: Option<String>,
    loading: bool,
}

/// Screen store for a donor's transaction history
///
/// Read-only: donations are fetched for the current donor and inspected
/// locally. Detail inspection never goes back to the network.
pub struct DonationHistory {
    backend: BackendRef,
    data: RwLock<HistoryData>,
}

impl DonationHistory {
    /// Create a new history store backed by the given backend
    pub fn new(backend: BackendRef) -> Self {
        Self {
            backend,
            data: RwLock::new(HistoryData::default()),
        }
    }

    /// Fetch the donation history for a donor
    pub async fn load_for(&mut self, donor: &DonorIdentity) -> Result<(), CoreError> {
        {
            let mut data = self.data.write().unwrap();
            data.loading = true;
        }

        let result = self.backend.donations_by_donor(donor.id).await;

        let mut data = self.data.write().unwrap();
        data.loading = false;
        match result {
            Ok(donations) => {
                debug!(
                    "donation history loaded: {} records for donor {}",
                    donations.len(),
                    donor.id
                );
                data.donations = donations;
                data.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("donation history fetch failed for donor {}: {}", donor.id, e);
                data.donations.clear();
                data.error = Some("Failed to load transaction history.".to_string());
                Err(CoreError::Fetch {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Get all donations from the last successful fetch
    pub fn donations(&self) -> Vec<DonationRecord> {
        self.data.read().unwrap().donations.clone()
    }

    /// Get a donation by id, from the already-fetched list
    pub fn donation(&self, id: u64) -> Option<DonationRecord> {
        let data = self.data.read().unwrap();
        data.donations.iter().find(|d| d.id == id).cloned()
    }

    /// Number of donations in the last successful fetch
    pub fn count(&self) -> usize {
        self.data.read().unwrap().donations.len()
    }

    /// Sum of donated amounts in the last successful fetch
    pub fn total_amount(&self) -> f64 {
        self.data.read().unwrap().donations.iter().map(|d| d.amount).sum()
    }

    /// Current error message, if any
    pub fn error(&self) -> Option<String> {
        self.data.read().unwrap().error.clone()
    }

    /// Whether a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        self.data.read().unwrap().loading
    }
}

// ==================== API Response Types ====================

/// Creators list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatorsResponse {
    pub creators: Vec<CreatorRecord>,
    pub total_count: usize,
}

/// Donations list response
#[derive(Debug, Serialize, Deserialize)]
pub struct DonationsResponse {
    pub donations: Vec<DonationRecord>,
    pub total_count: usize,
    pub total_amount: f64,
}

// ==================== Tests ====================
