//! Creator routes - Directory list, search, add, delete
//!
//! Features:
//! - List creators with free-text and category filtering
//! - Delete with a confirmation step (inline or modal, per config)
//! - Add creator form
//! - HTMX partial page updates
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_creator_detail,
    api_creators,
    htmx_creator_confirm,
    htmx_creator_delete,
    htmx_creator_store,
    htmx_creators_filter,
    htmx_creators_list,
};

pub use page::{page_creator_create, page_creators};
