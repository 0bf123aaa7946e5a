//! HTTP implementation of [`RecipeApi`].
//!
//! reqwest works on both native and WASM platforms:
//! - Native: hyper with rustls for HTTPS
//! - WASM: the browser's `fetch()` API
//!
//! Response status codes are not checked. The backend answers a missing
//! recipe with a JSON `{error}` body, so the body decides the outcome.

use super::{CategoryIndex, RecipeApi, RecipeLookup, SearchRequest, SearchResponse};
use crate::config::{ApiConfig, CATEGORIES_ENDPOINT, RECIPE_ENDPOINT, SEARCH_ENDPOINT};
use crate::error::ApiError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Talks to the recipe backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpRecipeApi {
    /// Creates a client for the backend at `config.base_url`.
    ///
    /// The base must be absolute; on the web resolve it against the page
    /// origin first (see [`ApiConfig::for_origin`]).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        // Url::join replaces the last path segment unless the base ends in '/'
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base: Url::parse(&base)?,
        })
    }

    /// Absolute URL of an endpoint under the API base.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// Absolute URL of the recipe endpoint for `name`, query-encoded.
    pub fn recipe_url(&self, name: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(RECIPE_ENDPOINT)?;
        url.query_pairs_mut().append_pair("name", name);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("Failed to read response body: {}", e)))?;
        decode_body(status, &body)
    }
}

/// Decodes a response body regardless of its status code.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if !status.is_success() {
        debug!("Backend answered {}, decoding body anyway", status);
    }
    Ok(serde_json::from_str(body)?)
}

#[async_trait::async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn search(&self, ingredients: &str) -> Result<SearchResponse, ApiError> {
        let url = self.endpoint(SEARCH_ENDPOINT)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&SearchRequest {
                ingredients: ingredients.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("Search request failed: {}", e)))?;

        Self::read_json(response).await
    }

    async fn categories(&self) -> Result<CategoryIndex, ApiError> {
        let url = self.endpoint(CATEGORIES_ENDPOINT)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("Categories request failed: {}", e)))?;

        Self::read_json(response).await
    }

    async fn recipe(&self, name: &str) -> Result<RecipeLookup, ApiError> {
        let url = self.recipe_url(name)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("Recipe request failed: {}", e)))?;

        Self::read_json(response).await
    }
}
