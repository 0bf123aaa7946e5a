//! Application configuration constants.
//!
//! These values define how the page talks to the backend and how results are
//! presented. They are compile-time constants: the app reads no environment
//! variables and persists nothing.
//!
//! # Usage
//!
//! ```
//! use recipe_finder_core::config::{ApiConfig, MISSING_PREVIEW_LIMIT};
//!
//! let config = ApiConfig::new("http://localhost:8888/api");
//! assert_eq!(config.base_url, "http://localhost:8888/api");
//! assert_eq!(MISSING_PREVIEW_LIMIT, 4);
//! ```

// =============================================================================
// Backend API
// =============================================================================

/// Path prefix every backend endpoint lives under.
pub const API_PREFIX: &str = "/api";

/// Origin used when there is no browser location to resolve against (desktop).
pub const DEFAULT_ORIGIN: &str = "http://localhost:8888";

/// Endpoint paths, relative to the API base.
pub const SEARCH_ENDPOINT: &str = "search";
pub const CATEGORIES_ENDPOINT: &str = "categories";
pub const RECIPE_ENDPOINT: &str = "recipe";

// =============================================================================
// Presentation
// =============================================================================

/// Number of missing ingredients shown on a result card before truncating.
pub const MISSING_PREVIEW_LIMIT: usize = 4;

/// Marker appended to a truncated missing-ingredient preview.
pub const TRUNCATION_MARKER: &str = "...";

/// Alert shown when the search box is empty.
pub const EMPTY_QUERY_ALERT: &str = "Please enter ingredients or a dish name!";

/// Alert shown when the backend has no recipe by the requested name.
pub const RECIPE_NOT_FOUND_ALERT: &str = "Recipe not found";

/// Alert shown when a recipe could not be fetched at all.
pub const RECIPE_FAILED_ALERT: &str = "Could not load recipe. Please try again later";

/// Quick search tags offered under the search box: (label, ingredients).
pub const QUICK_TAGS: &[(&str, &str)] = &[
    ("Paneer", "paneer, onion, tomato"),
    ("Chicken", "chicken, onion, garlic, ginger"),
    ("Dal", "lentils, turmeric, cumin"),
    ("Eggs", "egg, onion, green chilli"),
    ("Rice", "rice, peas, carrot"),
];

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base URL, e.g. `https://example.com/api`.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Builds the config for a page served from `origin`.
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), API_PREFIX))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_origin(DEFAULT_ORIGIN)
    }
}
