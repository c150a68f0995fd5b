//! Donation API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_donations: Get the current donor's donations (JSON)
//! - api_donation_detail: Get single donation (JSON)
//! - htmx_donations_list: Fetch and render the donation cards (HTML fragment)
//! - htmx_donation_detail: Detail modal from the in-memory record (no fetch)

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Path;
use fundweb_core::{DonationRecord, DonationsResponse};
use fundweb_utils::{escape_html, format_amount, format_number};

const LOGIN_GUARD_MESSAGE: &str = "Please log in to view your transaction history.";

/// Get the current donor's donations (JSON API)
pub async fn api_donations(
    state: axum::extract::State<AppState>,
) -> Result<axum::Json<DonationsResponse>, ApiError> {
    let donor = state.session.current_donor().ok_or(ApiError::BadRequest {
        message: "No donor is logged in".to_string(),
    })?;

    state
        .history
        .write()
        .await
        .load_for(&donor)
        .await
        .map_err(|e| ApiError::Upstream {
            message: e.to_string(),
        })?;

    let history = state.history.read().await;
    Ok(axum::Json(DonationsResponse {
        total_count: history.count(),
        total_amount: history.total_amount(),
        donations: history.donations(),
    }))
}

/// Get single donation detail (JSON API)
pub async fn api_donation_detail(
    state: axum::extract::State<AppState>,
    path: Path<u64>,
) -> Result<axum::Json<DonationRecord>, ApiError> {
    let history = state.history.read().await;
    history
        .donation(path.0)
        .map(axum::Json)
        .ok_or(ApiError::NotFound {
            resource: format!("donation {}", path.0),
        })
}

/// HTMX: Fetch the donor's history and render the card grid
pub async fn htmx_donations_list(state: axum::extract::State<AppState>) -> String {
    let donor = match state.session.current_donor() {
        Some(donor) => donor,
        None => {
            // Guard condition, not an error: there is nothing to fetch
            return format!(
                r#"<div class='text-center py-12 text-gray-500'><p>{}</p></div>"#,
                LOGIN_GUARD_MESSAGE
            );
        }
    };

    if let Err(e) = state.history.write().await.load_for(&donor).await {
        log::warn!("donation history load failed: {}", e);
    }

    render_donation_cards(&state).await
}

/// Render the donation cards from the current in-memory state
async fn render_donation_cards(state: &AppState) -> String {
    let history = state.history.read().await;
    let error = history.error();
    let donations = history.donations();
    let total_amount = history.total_amount();
    drop(history);

    let mut html = String::new();

    if let Some(error) = error {
        html.push_str(&format!(
            r#"<div class='bg-red-50 border border-red-200 text-red-700 rounded-lg p-4 mb-4'>{}</div>"#,
            escape_html(&error)
        ));
    }

    if donations.is_empty() {
        html.push_str(
            r#"<div class='text-center py-12 text-gray-500'><p>You have not donated yet.</p></div>"#,
        );
        return html;
    }

    html.push_str("<div class='grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4'>");
    for donation in &donations {
        html.push_str(&render_donation_card(donation));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<div class='mt-6 text-sm text-gray-500'>{} donations · ₹{} total</div>"#,
        format_number(donations.len()),
        format_amount(total_amount)
    ));

    html
}

/// Render one donation card
fn render_donation_card(donation: &DonationRecord) -> String {
    format!(
        r#"<div class='bg-white rounded-xl shadow-sm border p-4 flex flex-col'>
            <div class='flex items-start justify-between gap-2 mb-3'>
                <div class='min-w-0'>
                    <div class='font-semibold truncate'>{}</div>
                    <div class='text-xs text-gray-500'>{}</div>
                </div>
                <div class='text-lg font-bold text-indigo-600 flex-shrink-0'>₹{}</div>
            </div>
            <div class='space-y-1 text-sm flex-1'>
                <div class='flex justify-between gap-2'><span class='text-gray-500'>Donation ID</span><span>#{}</span></div>
                <div class='flex justify-between gap-2'><span class='text-gray-500'>Date &amp; Time</span><span>{}</span></div>
                <div class='flex justify-between gap-2'><span class='text-gray-500'>Message</span><span class='truncate'>{}</span></div>
            </div>
            <div class='mt-3 pt-3 border-t text-right'>
                <button hx-get='/donations/{}/detail' hx-target='body' hx-swap='beforeend'
                    class='px-3 py-1.5 text-sm bg-indigo-50 text-indigo-600 rounded-lg hover:bg-indigo-100'>View</button>
            </div>
        </div>"#,
        escape_html(donation.campaign_title()),
        escape_html(donation.campaign_category()),
        format_amount(donation.amount),
        donation.id,
        escape_html(&donation.display_datetime()),
        escape_html(donation.display_message()),
        donation.id
    )
}

/// HTMX: Donation detail modal
///
/// Populated entirely from the already-fetched record; closing the modal
/// clears the selection. No backend interaction.
pub async fn htmx_donation_detail(
    state: axum::extract::State<AppState>,
    path: Path<u64>,
) -> String {
    let history = state.history.read().await;
    let donation = history.donation(path.0);
    drop(history);

    match donation {
        Some(donation) => format!(
            r#"<div id='donation-modal-{}' class='fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center' onclick='if(event.target.id === "donation-modal-{}") closeDetailModal()'>
    <div class='bg-white rounded-xl shadow-2xl w-full max-w-md overflow-hidden' onclick='event.stopPropagation()'>
        <div class='flex items-center justify-between px-6 py-4 border-b'>
            <h2 class='text-xl font-bold'>Donation Details</h2>
            <button onclick='closeDetailModal()' class='text-gray-500 hover:text-gray-700 p-2'>
                <svg class='w-6 h-6' fill='none' stroke='currentColor' viewBox='0 0 24 24'>
                    <path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M6 18L18 6M6 6l12 12'/>
                </svg>
            </button>
        </div>
        <div class='p-6 space-y-2 text-sm'>
            <p><span class='font-medium'>Campaign:</span> {}</p>
            <p><span class='font-medium'>Category:</span> {}</p>
            <p><span class='font-medium'>Amount:</span> ₹{}</p>
            <p><span class='font-medium'>Donation ID:</span> #{}</p>
            <p><span class='font-medium'>Date:</span> {}</p>
            <p><span class='font-medium'>Message:</span> {}</p>
            <div class='flex items-center justify-end mt-4 pt-4 border-t'>
                <button onclick='closeDetailModal()' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Close</button>
            </div>
        </div>
    </div>
</div>
<script>
function closeDetailModal() {{
    const modal = document.querySelector("[id^='donation-modal-']");
    if (modal) {{ modal.remove(); }}
}}
document.addEventListener('keydown', function(e) {{
    if (e.key === 'Escape') closeDetailModal();
}});
</script>"#,
            donation.id,
            donation.id,
            escape_html(donation.campaign_title()),
            escape_html(donation.campaign_category()),
            format_amount(donation.amount),
            donation.id,
            escape_html(&donation.display_datetime()),
            escape_html(donation.display_message()),
        ),
        None => format!(
            r#"<div class='fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center' onclick='if(event.target === this) this.remove()'>
    <div class='bg-red-50 border border-red-200 rounded-lg p-6 text-center' onclick='event.stopPropagation()'>
        <h3 class='text-lg font-medium text-red-800 mb-2'>Donation not found</h3>
        <p class='text-red-600 mb-4'>Donation ID: {}</p>
        <button onclick='this.closest(".fixed").remove()' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Close</button>
    </div>
</div>"#,
            path.0
        ),
    }
}
