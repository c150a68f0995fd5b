//! Donation routes - Donor transaction history
//!
//! Features:
//! - Card list of the current donor's past donations
//! - Read-only detail modal, populated from the already-fetched record
//! - "Please log in" guard when no donor identity is present
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_donation_detail,
    api_donations,
    htmx_donation_detail,
    htmx_donations_list,
};

pub use page::page_donations;
