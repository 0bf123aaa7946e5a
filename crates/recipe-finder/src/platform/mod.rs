//! Platform-specific configuration.
//!
//! - **Web**: the backend is served from the same origin as the page, so the
//!   API base is `window.location.origin` + `/api`.
//! - **Desktop**: there is no page origin; use the local development backend.

use recipe_finder_core::config::ApiConfig;

/// Resolves where the backend lives on this platform.
#[cfg(target_arch = "wasm32")]
pub fn api_config() -> ApiConfig {
    use dioxus::logger::tracing::warn;

    match web_sys::window().and_then(|window| window.location().origin().ok()) {
        Some(origin) => ApiConfig::for_origin(&origin),
        None => {
            warn!("No window origin available, falling back to the default API base");
            ApiConfig::default()
        }
    }
}

/// Resolves where the backend lives on this platform.
///
/// Desktop version: always the default local backend.
#[cfg(not(target_arch = "wasm32"))]
pub fn api_config() -> ApiConfig {
    ApiConfig::default()
}
