//! ==============================================================================
//! api.rs - navbar config loading
//! ==============================================================================

use gloo_net::http::Request;
use shared::NavbarConfig;

// served next to index.html
pub const NAVBAR_CONFIG_URL: &str = "/overview-pages.json";

/// Fetch the navbar config
pub async fn fetch_navbar_config(url: &str) -> Result<NavbarConfig, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("{} returned {}", url, response.status()));
    }

    let body = response.text().await.map_err(|e| e.to_string())?;
    NavbarConfig::from_json(&body).map_err(|e| e.to_string())
}
