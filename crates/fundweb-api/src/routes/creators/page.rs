//! Creator page rendering - Full page endpoints
//!
//! Endpoints:
//! - page_creators: Creator directory page with search and category filter
//! - page_creator_create: Add creator form page

use fundweb_core::Category;

/// Creator directory page - search box, category select, and the list
///
/// The list container fetches `/creators/list` on mount, which is where
/// the backend round-trip happens. Typing or changing the category only
/// re-projects the already-fetched list through `/creators/filter`.
pub async fn page_creators(headers: axum::http::HeaderMap) -> axum::response::Html<String> {
    let mut category_options = String::from("<option>All</option>");
    for category in Category::ALL {
        category_options.push_str(&format!("<option>{}</option>", category));
    }

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4 flex-wrap gap-3'>
            <h2 class='text-2xl font-bold'>Manage Creators</h2>
            <div class='flex gap-2 items-center' id='creator-filters'>
                <a href='/creators/create' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 flex items-center gap-2'>
                    <svg xmlns='http://www.w3.org/2000/svg' class='h-5 w-5' fill='none' viewBox='0 0 24 24' stroke='currentColor'>
                        <path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M12 4v16m8-8H4'/>
                    </svg>
                    Add Creator
                </a>
                <input type='text' id='creator-search' name='q'
                    placeholder='Search by name, email, username, mobile, location...'
                    hx-get='/creators/filter' hx-target='#creators-content' hx-trigger='keyup changed delay:500ms'
                    hx-include='#creator-filters'
                    class='px-4 py-2 border rounded-lg w-80'>
                <select id='creator-category' name='category'
                    hx-get='/creators/filter' hx-target='#creators-content' hx-trigger='change'
                    hx-include='#creator-filters'
                    class='px-4 py-2 border rounded-lg'>
                    {}
                </select>
            </div>
        </div>
        <div id='creator-action-result'></div>
        <div id='creators-content' hx-get='/creators/list' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6'>
            <p class='text-gray-500 text-center'>Loading creators...</p>
        </div>"#,
        category_options
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Manage Creators",
        "/creators",
        &inner_content,
    ))
}

/// Add creator form page
pub async fn page_creator_create(headers: axum::http::HeaderMap) -> axum::response::Html<String> {
    let mut category_options = String::from("<option value=''>Select Category</option>");
    for category in Category::ALL {
        category_options.push_str(&format!("<option>{}</option>", category));
    }

    let inner_content = format!(
        r#"<div class='max-w-2xl'>
            <div class='mb-4'>
                <h2 class='text-2xl font-bold'>Add Creator</h2>
            </div>
            <div id='create-result' class='mb-4'></div>
            <form id='creator-form' hx-post='/creators' hx-target='#create-result' hx-swap='innerHTML'
                class='bg-white rounded-xl shadow-sm p-6 space-y-4'>
                <div class='grid grid-cols-1 md:grid-cols-2 gap-4'>
                    <div>
                        <label for='name' class='block text-sm font-medium text-gray-700 mb-1'>Full Name</label>
                        <input type='text' id='name' name='name' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                    </div>
                    <div>
                        <label for='category' class='block text-sm font-medium text-gray-700 mb-1'>Category</label>
                        <select id='category' name='category' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                            {}
                        </select>
                    </div>
                </div>
                <div class='grid grid-cols-1 md:grid-cols-2 gap-4'>
                    <div>
                        <label for='email' class='block text-sm font-medium text-gray-700 mb-1'>Email</label>
                        <input type='email' id='email' name='email' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                    </div>
                    <div>
                        <label for='username' class='block text-sm font-medium text-gray-700 mb-1'>Username</label>
                        <input type='text' id='username' name='username' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                    </div>
                </div>
                <div class='grid grid-cols-1 md:grid-cols-2 gap-4'>
                    <div>
                        <label for='password' class='block text-sm font-medium text-gray-700 mb-1'>Password</label>
                        <input type='password' id='password' name='password' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                    </div>
                    <div>
                        <label for='mobileno' class='block text-sm font-medium text-gray-700 mb-1'>Mobile Number</label>
                        <input type='tel' id='mobileno' name='mobileno' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                    </div>
                </div>
                <div>
                    <label for='location' class='block text-sm font-medium text-gray-700 mb-1'>Location</label>
                    <input type='text' id='location' name='location' required class='w-full px-3 py-2.5 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
                </div>
                <div class='pt-2'>
                    <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>
                        Add Creator
                        <span class='htmx-indicator'>...</span>
                    </button>
                </div>
            </form>
        </div>"#,
        category_options
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Add Creator",
        "/creators/create",
        &inner_content,
    ))
}
