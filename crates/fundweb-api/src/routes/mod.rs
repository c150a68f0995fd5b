//! Route modules for the API server
//!
//! All routes are organized into modules:
//! - creators: Creator directory, search/filter, add, delete
//! - donations: Donor transaction history, detail inspection
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod creators;
pub mod donations;
