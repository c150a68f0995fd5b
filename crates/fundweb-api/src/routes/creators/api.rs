//! Creator API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_creators: Get creator list (JSON)
//! - api_creator_detail: Get single creator (JSON)
//! - htmx_creators_list: Fetch from the backend, then render the list (HTML fragment)
//! - htmx_creators_filter: Re-project the in-memory list (HTML fragment, no fetch)
//! - htmx_creator_confirm: Delete confirmation modal (HTML fragment)
//! - htmx_creator_delete: Delete a creator, refetch, re-render
//! - htmx_creator_store: Store a new creator (HTMX)

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, Query};
use axum::Form;
use fundweb_config::ConfirmMode;
use fundweb_core::{
    Category, CategoryFilter, CoreError, CreatorFilter, CreatorRecord, CreatorsResponse,
    NewCreator,
};
use fundweb_utils::{escape_html, format_number};
use std::collections::HashMap;

/// Build a filter from the `q` and `category` query parameters
fn filter_from_params(params: &HashMap<String, String>) -> CreatorFilter {
    let query = params.get("q").cloned().unwrap_or_default();
    let category = params
        .get("category")
        .and_then(|s| s.parse().ok())
        .unwrap_or(CategoryFilter::All);
    CreatorFilter { query, category }
}

/// Get creators with optional filtering (JSON API)
pub async fn api_creators(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<axum::Json<CreatorsResponse>, ApiError> {
    crate::ensure_directory_loaded(&state)
        .await
        .map_err(|e| ApiError::Upstream {
            message: e.to_string(),
        })?;

    let directory = state.directory.read().await;
    let creators = directory.filter(&filter_from_params(&params));

    Ok(axum::Json(CreatorsResponse {
        total_count: creators.len(),
        creators,
    }))
}

/// Get single creator detail (JSON API)
pub async fn api_creator_detail(
    state: axum::extract::State<AppState>,
    path: Path<u64>,
) -> Result<axum::Json<CreatorRecord>, ApiError> {
    let directory = state.directory.read().await;
    directory
        .creator(path.0)
        .map(axum::Json)
        .ok_or(ApiError::NotFound {
            resource: format!("creator {}", path.0),
        })
}

/// HTMX: Fetch the creator collection, then render the list
///
/// Used on screen mount. Filtering between fetches goes through
/// `htmx_creators_filter` instead, which is a pure projection.
pub async fn htmx_creators_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    if let Err(e) = state.directory.write().await.load().await {
        // The store already carries the user-visible message
        log::warn!("creator list load failed: {}", e);
    }

    render_creator_list(&state, &filter_from_params(&params)).await
}

/// HTMX: Re-render the list through the filter, without refetching
///
/// Recomputed on every keystroke and category change; the projection only
/// ever reads the last successful fetch.
pub async fn htmx_creators_filter(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    render_creator_list(&state, &filter_from_params(&params)).await
}

/// Render the creator table from the current in-memory state
async fn render_creator_list(state: &AppState, filter: &CreatorFilter) -> String {
    let directory = state.directory.read().await;
    let error = directory.error();
    let loading = directory.is_loading();
    let total = directory.count();
    let creators = directory.filter(filter);
    drop(directory);

    let confirm_mode = state.config.ui.confirm_mode;
    let mut html = String::new();

    if let Some(error) = error {
        html.push_str(&format!(
            r#"<div class='bg-red-50 border border-red-200 text-red-700 rounded-lg p-4 mb-4'>{}</div>"#,
            escape_html(&error)
        ));
    }

    if loading {
        html.push_str(r#"<div class='text-center py-4 text-gray-500'>Loading creators...</div>"#);
    }

    if creators.is_empty() {
        html.push_str(
            r#"<div class='text-center py-12 text-gray-500'><p>No Creator Data Found</p></div>"#,
        );
        return html;
    }

    html.push_str(
        r#"<div class='overflow-x-auto'><table class='min-w-full text-sm'>
        <thead>
            <tr class='border-b text-left text-gray-500'>
                <th class='py-2 pr-4'>ID</th>
                <th class='py-2 pr-4'>Name</th>
                <th class='py-2 pr-4'>Email</th>
                <th class='py-2 pr-4'>Username</th>
                <th class='py-2 pr-4'>Mobile</th>
                <th class='py-2 pr-4'>Category</th>
                <th class='py-2 pr-4'>Location</th>
                <th class='py-2'>Action</th>
            </tr>
        </thead>
        <tbody>"#,
    );

    for creator in &creators {
        html.push_str(&render_creator_row(creator, confirm_mode));
    }

    html.push_str("</tbody></table></div>");

    html.push_str(&format!(
        r#"<div class='mt-4 text-sm text-gray-500'>Showing {} of {} creators</div>"#,
        format_number(creators.len()),
        format_number(total)
    ));

    html
}

/// Render one table row
fn render_creator_row(creator: &CreatorRecord, confirm_mode: ConfirmMode) -> String {
    let badge_class = match creator.category {
        Category::Startup => "bg-blue-100 text-blue-700",
        Category::Charity => "bg-green-100 text-green-700",
        Category::Sponsorship => "bg-purple-100 text-purple-700",
        Category::Healthcare => "bg-red-100 text-red-700",
    };

    let delete_button = match confirm_mode {
        ConfirmMode::Inline => format!(
            r#"<button hx-delete='/creators/{}' hx-confirm='Are you sure you want to delete this creator?' hx-target='#creator-action-result' hx-swap='innerHTML' class='px-3 py-1.5 text-sm bg-red-50 text-red-600 rounded-lg hover:bg-red-100'>Delete</button>"#,
            creator.id
        ),
        ConfirmMode::Modal => format!(
            r#"<button hx-get='/creators/{}/confirm' hx-target='body' hx-swap='beforeend' class='px-3 py-1.5 text-sm bg-red-50 text-red-600 rounded-lg hover:bg-red-100'>Delete</button>"#,
            creator.id
        ),
    };

    format!(
        r#"<tr class='border-b last:border-0 hover:bg-gray-50'>
            <td class='py-2 pr-4 text-gray-500'>{}</td>
            <td class='py-2 pr-4 font-medium'>{}</td>
            <td class='py-2 pr-4'>{}</td>
            <td class='py-2 pr-4'>{}</td>
            <td class='py-2 pr-4'>{}</td>
            <td class='py-2 pr-4'><span class='px-2 py-1 rounded text-xs {}'>{}</span></td>
            <td class='py-2 pr-4'>{}</td>
            <td class='py-2'>{}</td>
        </tr>"#,
        creator.id,
        escape_html(&creator.name),
        optional_cell(creator.email.as_deref()),
        optional_cell(creator.username.as_deref()),
        optional_cell(creator.mobile.as_deref()),
        badge_class,
        creator.category,
        optional_cell(creator.location.as_deref()),
        delete_button
    )
}

fn optional_cell(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => escape_html(value),
        _ => "—".to_string(),
    }
}

/// HTMX: Delete confirmation modal
///
/// The selected creator is view-state only; closing the modal clears it.
pub async fn htmx_creator_confirm(
    state: axum::extract::State<AppState>,
    path: Path<u64>,
) -> String {
    let directory = state.directory.read().await;
    let creator = directory.creator(path.0);
    drop(directory);

    match creator {
        Some(creator) => format!(
            r#"<div id='confirm-modal-{}' class='fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center' onclick='if(event.target.id === "confirm-modal-{}") closeConfirmModal()'>
    <div class='bg-white rounded-xl shadow-2xl w-full max-w-md overflow-hidden' onclick='event.stopPropagation()'>
        <div class='flex items-center justify-between px-6 py-4 border-b'>
            <h2 class='text-xl font-bold'>Delete Creator</h2>
            <button onclick='closeConfirmModal()' class='text-gray-500 hover:text-gray-700 p-2'>
                <svg class='w-6 h-6' fill='none' stroke='currentColor' viewBox='0 0 24 24'>
                    <path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M6 18L18 6M6 6l12 12'/>
                </svg>
            </button>
        </div>
        <div class='p-6'>
            <p class='text-gray-700'>Are you sure you want to delete <span class='font-medium'>{}</span>?</p>
            <p class='text-sm text-gray-500 mt-1'>This action cannot be undone.</p>
            <div class='flex items-center justify-end gap-3 mt-6'>
                <button onclick='closeConfirmModal()' class='px-4 py-2 border rounded-lg hover:bg-gray-50'>Cancel</button>
                <button hx-delete='/creators/{}' hx-target='#creator-action-result' hx-swap='innerHTML' class='px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700'>Delete</button>
            </div>
        </div>
    </div>
</div>
<script>
function closeConfirmModal() {{
    const modal = document.querySelector("[id^='confirm-modal-']");
    if (modal) {{ modal.remove(); }}
}}
document.addEventListener('keydown', function(e) {{
    if (e.key === 'Escape') closeConfirmModal();
}});
</script>"#,
            creator.id,
            creator.id,
            escape_html(&creator.name),
            creator.id
        ),
        None => format!(
            r#"<div class='fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center' onclick='if(event.target === this) this.remove()'>
    <div class='bg-red-50 border border-red-200 rounded-lg p-6 text-center' onclick='event.stopPropagation()'>
        <h3 class='text-lg font-medium text-red-800 mb-2'>Creator not found</h3>
        <p class='text-red-600 mb-4'>Creator ID: {}</p>
        <button onclick='this.closest(".fixed").remove()' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Close</button>
    </div>
</div>"#,
            path.0
        ),
    }
}

/// Refresh the list fragment with whatever filter values are on screen
const REFRESH_LIST_SCRIPT: &str = r#"<script>
var confirmModal = document.querySelector("[id^='confirm-modal-']");
if (confirmModal) { confirmModal.remove(); }
var searchBox = document.getElementById('creator-search');
var categorySelect = document.getElementById('creator-category');
var listQuery = searchBox ? searchBox.value : '';
var listCategory = categorySelect ? categorySelect.value : 'All';
htmx.ajax('GET', '/creators/filter?q=' + encodeURIComponent(listQuery) + '&category=' + encodeURIComponent(listCategory), {target: '#creators-content'});
</script>"#;

/// Handle a delete request
///
/// The confirmation step has already happened (inline confirm or modal).
/// On success the directory was refetched; either way the list fragment is
/// re-rendered from the store so the screen matches the backend.
pub async fn htmx_creator_delete(
    state: axum::extract::State<AppState>,
    path: Path<u64>,
) -> String {
    let result = state.directory.write().await.delete_creator(path.0).await;

    match result {
        Ok(_) => format!(
            r#"<div class='bg-green-50 border border-green-200 rounded-lg p-4 mb-4'><div class='flex items-center gap-2'><span class='text-green-600'>✓</span><span class='font-medium text-green-800'>Creator deleted</span></div></div>{}"#,
            REFRESH_LIST_SCRIPT
        ),
        Err(e) => format!(
            r#"<div class='bg-red-50 border border-red-200 rounded-lg p-4 mb-4'><div class='flex items-center gap-2'><span class='text-red-600'>✗</span><span class='font-medium text-red-800'>Delete failed</span></div><p class='text-sm text-red-600 mt-1'>{}</p></div>{}"#,
            escape_html(&e.to_string()),
            REFRESH_LIST_SCRIPT
        ),
    }
}

/// Store a new creator (HTMX)
pub async fn htmx_creator_store(
    state: axum::extract::State<AppState>,
    form: Form<NewCreator>,
) -> String {
    let result = state.directory.write().await.add_creator(form.0).await;

    match result {
        Ok(message) => {
            let message = if message.trim().is_empty() {
                "Creator added successfully".to_string()
            } else {
                message
            };
            format!(
                r#"<div class='bg-green-50 border border-green-200 rounded-lg p-4'><div class='flex items-center gap-2'><span class='text-green-600'>✓</span><span class='font-medium text-green-800'>{}</span></div></div>
<script>
var creatorForm = document.getElementById('creator-form');
if (creatorForm) {{ creatorForm.reset(); }}
</script>"#,
                escape_html(&message)
            )
        }
        Err(e) => {
            // Show the backend's payload (or the validation message) verbatim
            let message = match &e {
                CoreError::Mutation { message } => message.clone(),
                CoreError::Validation { message } => message.clone(),
                other => other.to_string(),
            };
            format!(
                r#"<div class='bg-red-50 border border-red-200 rounded-lg p-4'><div class='flex items-center gap-2'><span class='text-red-600'>✗</span><span class='font-medium text-red-800'>Could not add creator</span></div><p class='text-sm text-red-600 mt-1'>{}</p></div>"#,
                escape_html(&message)
            )
        }
    }
}
