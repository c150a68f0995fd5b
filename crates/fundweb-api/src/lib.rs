//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::creators: Creator directory, search/filter, add, delete
//! - routes::donations: Donor transaction history, detail view

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use fundweb_config::Config;
use fundweb_core::{CoreError, CreatorDirectory, DonationHistory, SessionRef};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<CreatorDirectory>>,
    pub history: Arc<RwLock<DonationHistory>>,
    pub session: SessionRef,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::creators::{
        api_creator_detail, api_creators, htmx_creator_confirm, htmx_creator_delete,
        htmx_creator_store, htmx_creators_filter, htmx_creators_list, page_creator_create,
        page_creators,
    };
    use routes::donations::{
        api_donation_detail, api_donations, htmx_donation_detail, htmx_donations_list,
        page_donations,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/creators", get(api_creators))
        .route("/api/creators/:id", get(api_creator_detail))
        .route("/api/donations", get(api_donations))
        .route("/api/donations/:id", get(api_donation_detail))
        .route("/api/reload", post(api_reload))
        // HTMX page routes
        .route("/", get(page_creators))
        .route("/creators", get(page_creators))
        .route("/creators", post(htmx_creator_store))
        .route("/creators/create", get(page_creator_create))
        .route("/donations", get(page_donations))
        // HTMX partial routes
        .route("/creators/list", get(htmx_creators_list))
        .route("/creators/filter", get(htmx_creators_filter))
        .route("/creators/:id/confirm", get(htmx_creator_confirm))
        .route("/creators/:id", delete(htmx_creator_delete))
        .route("/donations/list", get(htmx_donations_list))
        .route("/donations/:id/detail", get(htmx_donation_detail))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Refetch the creator directory (JSON API)
async fn api_reload(state: axum::extract::State<AppState>) -> String {
    let mut directory = state.directory.write().await;
    match directory.load().await {
        Ok(_) => serde_json::json!({
            "success": true,
            "message": "Creator directory reloaded"
        })
        .to_string(),
        Err(e) => serde_json::json!({
            "success": false,
            "code": e.code().to_string(),
            "message": e.to_string()
        })
        .to_string(),
    }
}

/// Fetch the creator directory once if no fetch has succeeded yet
pub(crate) async fn ensure_directory_loaded(state: &AppState) -> Result<(), CoreError> {
    if state.directory.read().await.is_loaded() {
        return Ok(());
    }
    state.directory.write().await.load().await
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Fundweb</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/creators", "Creators", "creators"),
        ("/creators/create", "Add Creator", "add"),
        ("/donations", "Transactions", "donations"),
    ];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-indigo-600'>Fundweb</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label, id) in &links {
        let is_active = if *path == "/creators" {
            current_path == "/creators" || current_path == "/"
        } else {
            current_path == *path
        };
        let active_class = if is_active {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        let icon = match *id {
            "creators" => "👥",
            "add" => "➕",
            "donations" => "💳",
            _ => "📄",
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area (no sidebar for partial updates)
        format!(
            r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            inner_content
        )
    } else {
        // Full page - wrap with base HTML and sidebar
        base_html(
            title,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path),
                inner_content
            ),
        )
    }
}

/// Start the HTTP server
///
/// This is the main entry point for the fundweb server.
/// It creates the router, binds to the address, and starts listening for
/// requests.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `directory` - The shared creator directory state
/// * `history` - The shared donation history state
/// * `session` - The donor session store
pub async fn start_server(
    config: Config,
    directory: Arc<RwLock<CreatorDirectory>>,
    history: Arc<RwLock<DonationHistory>>,
    session: SessionRef,
) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        directory,
        history,
        session,
        config,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    eprintln!("[INFO] Starting Fundweb server on http://{}", addr);
    eprintln!("[INFO] Available routes:");
    eprintln!("[INFO]   - /creators (Creator directory)");
    eprintln!("[INFO]   - /creators/create (Add creator)");
    eprintln!("[INFO]   - /donations (Transaction history)");
    eprintln!("[INFO]   - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => eprintln!("[INFO] Server stopped gracefully"),
        Err(e) => eprintln!("[ERROR] Server error: {}", e),
    }
}
