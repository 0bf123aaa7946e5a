//! Recipe backend client.
//!
//! The backend exposes three JSON endpoints under a fixed prefix:
//!
//! - `POST /search` with `{ingredients}` returns a [`SearchResponse`]
//! - `GET /categories` returns a [`CategoryIndex`]
//! - `GET /recipe?name=` returns a [`RecipeLookup`]
//!
//! [`RecipeApi`] is the seam the view controller talks through.
//! [`HttpRecipeApi`] is the real implementation; tests substitute an
//! in-memory one.

mod http;
mod types;

pub use http::HttpRecipeApi;
pub use types::{
    CategoryEntry, CategoryIndex, RecipeDetail, RecipeLookup, RecipeSummary, SearchRequest,
    SearchResponse,
};

use crate::error::ApiError;

/// Access to the recipe backend.
///
/// Not `Send`: on the web every future runs on the browser's single thread.
#[async_trait::async_trait(?Send)]
pub trait RecipeApi {
    /// Search by ingredient list or dish name.
    async fn search(&self, ingredients: &str) -> Result<SearchResponse, ApiError>;

    /// Fetch the full category index.
    async fn categories(&self) -> Result<CategoryIndex, ApiError>;

    /// Fetch one recipe by exact name.
    async fn recipe(&self, name: &str) -> Result<RecipeLookup, ApiError>;
}
