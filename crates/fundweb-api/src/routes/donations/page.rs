//! Donations page rendering - Full page endpoints
//!
//! Endpoints:
//! - page_donations: Transaction history page for the current donor

/// Transaction history page
///
/// The card grid loads through `/donations/list` on mount; the login guard
/// and error states render inside that fragment.
pub async fn page_donations(headers: axum::http::HeaderMap) -> axum::response::Html<String> {
    let inner_content = r#"<div class='mb-4'>
            <h2 class='text-2xl font-bold'>Transaction History</h2>
        </div>
        <div id='donations-content' hx-get='/donations/list' hx-trigger='load'>
            <p class='text-gray-500 text-center py-12'>Loading transactions...</p>
        </div>"#;

    axum::response::Html(crate::page_response(
        &headers,
        "Transaction History",
        "/donations",
        inner_content,
    ))
}
