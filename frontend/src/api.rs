#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(feature = "mock")]
use appnest_shared::page_state::join_results;
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;

#[cfg(feature = "mock")]
use crate::models;
use crate::models::Catalog;

// API base URL, read from the environment at compile time. Release builds set
// APPNEST_API_BASE; local development talks to the backend on port 3000.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("APPNEST_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// GETs `{API_BASE}{path}` bypassing the browser cache; the backend owns
/// caching.
#[cfg(not(feature = "mock"))]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}?_ts={}", API_BASE, path, Date::now() as u64);

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))
}

/// Apps and categories in one response; the backend queries both
/// collections together and fails the whole load if either query fails.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    #[cfg(feature = "mock")]
    {
        let (apps, categories) = join_results(models::get_mock_apps(), models::get_mock_categories())?;
        return Ok(Catalog {
            apps,
            categories,
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json("/catalog").await
    }
}
