//! Test utilities for recipe-finder-core.
//!
//! An in-memory [`RecipeApi`] that records every call, and a
//! [`RenderTarget`] that records everything drawn. Only compiled for tests.

use crate::api::{CategoryIndex, RecipeApi, RecipeDetail, RecipeLookup, SearchResponse};
use crate::error::ApiError;
use crate::render::RenderTarget;
use crate::views::Screen;
use std::cell::RefCell;

/// Canned backend responses.
///
/// Search and categories answer with whatever was configured (empty by
/// default). Recipes are looked up by exact name; unknown names get the
/// backend's `{error}` body.
#[derive(Default)]
pub struct StubApi {
    search: RefCell<Option<Result<SearchResponse, ApiError>>>,
    categories: RefCell<Option<Result<CategoryIndex, ApiError>>>,
    recipes: Vec<RecipeDetail>,
    recipes_fail: bool,
    calls: RefCell<Vec<String>>,
}

impl StubApi {
    pub fn with_search(self, response: Result<SearchResponse, ApiError>) -> Self {
        *self.search.borrow_mut() = Some(response);
        self
    }

    pub fn with_categories(self, response: Result<CategoryIndex, ApiError>) -> Self {
        self.set_categories(response);
        self
    }

    pub fn with_recipe(mut self, recipe: RecipeDetail) -> Self {
        self.recipes.push(recipe);
        self
    }

    pub fn failing_recipes(mut self) -> Self {
        self.recipes_fail = true;
        self
    }

    pub fn set_categories(&self, response: Result<CategoryIndex, ApiError>) {
        *self.categories.borrow_mut() = Some(response);
    }

    /// Calls made so far, as `search:<query>`, `categories`, `recipe:<name>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl RecipeApi for StubApi {
    async fn search(&self, ingredients: &str) -> Result<SearchResponse, ApiError> {
        self.calls.borrow_mut().push(format!("search:{}", ingredients));
        self.search
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(SearchResponse::default()))
    }

    async fn categories(&self) -> Result<CategoryIndex, ApiError> {
        self.calls.borrow_mut().push("categories".to_string());
        self.categories
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(CategoryIndex::new()))
    }

    async fn recipe(&self, name: &str) -> Result<RecipeLookup, ApiError> {
        self.calls.borrow_mut().push(format!("recipe:{}", name));
        if self.recipes_fail {
            return Err(ApiError::RequestFailed("connection refused".to_string()));
        }

        Ok(self
            .recipes
            .iter()
            .find(|recipe| recipe.name == name)
            .cloned()
            .map(RecipeLookup::Found)
            .unwrap_or_else(|| RecipeLookup::NotFound {
                error: "Recipe not found".to_string(),
            }))
    }
}

/// Records everything the controller draws.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub screens: Vec<Screen>,
    pub alerts: Vec<String>,
    pub loading: bool,
    pub loading_events: Vec<bool>,
}

impl RecordingTarget {
    pub fn last_screen(&self) -> Option<&Screen> {
        self.screens.last()
    }
}

impl RenderTarget for RecordingTarget {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.loading_events.push(visible);
    }

    fn render(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
