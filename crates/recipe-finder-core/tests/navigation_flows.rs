//! End-to-end navigation flows through the view controller.
//!
//! These tests drive a [`ViewController`] the way the page does, with a
//! backend that answers from JSON fixtures shaped exactly like the real API,
//! and check the view state and rendered panels after each step.

use recipe_finder_core::api::{CategoryIndex, RecipeApi, RecipeLookup, SearchResponse};
use recipe_finder_core::error::ApiError;
use recipe_finder_core::render::RenderTarget;
use recipe_finder_core::views::{DishList, MissingPreview, ResultsPanel, Screen};
use recipe_finder_core::{View, ViewAction, ViewController};
use std::cell::Cell;

// ============================================================================
// Fixtures
// ============================================================================

const SEARCH_JSON: &str = r#"{
    "directMatch": false,
    "recipes": [
        {"name": "Palak Paneer", "matchCount": 2, "matchPercentage": 49.5,
         "missing": ["spinach", "cream", "garlic", "ginger", "cumin", "chilli"]},
        {"name": "Paneer Bhurji", "matchCount": 3, "matchPercentage": 100, "missing": []}
    ],
    "totalFound": 9
}"#;

const DIRECT_JSON: &str = r#"{
    "directMatch": true,
    "recipe": {
        "name": "Masala Dosa",
        "ingredients": ["rice batter", "POTATO"],
        "instructions": ["Spread batter.", "Add filling."]
    }
}"#;

const CATEGORIES_JSON: &str = r#"{
    "Veggie Soup": {"count": 1, "dishes": ["Tomato Shorba"]},
    "Non-Veg Starters": {"count": 2, "dishes": ["Chicken 65", "Fish Tikka"]},
    "Veg Curry": {"count": 2, "dishes": ["Aloo Gobi", "Chana Masala"]},
    "Paneer Delight": {"count": 1, "dishes": ["Paneer Tikka"]}
}"#;

const RECIPE_JSON: &str = r#"{
    "name": "Aloo Gobi",
    "ingredients": ["potato", "cauliflower"],
    "instructions": ["Chop.", "Cook."]
}"#;

const NULL_RECIPES_JSON: &str = r#"{"directMatch": false, "recipes": null}"#;

const NULL_DISHES_JSON: &str = r#"{
    "Veg Curry": {"count": 2, "dishes": ["Aloo Gobi", "Chana Masala"]},
    "Chef Specials": {"count": 0, "dishes": null}
}"#;

const NOT_FOUND_JSON: &str = r#"{"error": "Recipe not found"}"#;

/// Backend answering from the fixtures above. Counts requests.
struct FixtureApi {
    search_body: &'static str,
    categories_body: &'static str,
    requests: Cell<usize>,
}

impl FixtureApi {
    fn new(search_body: &'static str) -> Self {
        Self {
            search_body,
            categories_body: CATEGORIES_JSON,
            requests: Cell::new(0),
        }
    }

    fn with_categories(mut self, categories_body: &'static str) -> Self {
        self.categories_body = categories_body;
        self
    }

    fn bump(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[async_trait::async_trait(?Send)]
impl RecipeApi for FixtureApi {
    async fn search(&self, _ingredients: &str) -> Result<SearchResponse, ApiError> {
        self.bump();
        Ok(serde_json::from_str(self.search_body)?)
    }

    async fn categories(&self) -> Result<CategoryIndex, ApiError> {
        self.bump();
        Ok(serde_json::from_str(self.categories_body)?)
    }

    async fn recipe(&self, name: &str) -> Result<RecipeLookup, ApiError> {
        self.bump();
        let body = if name == "Aloo Gobi" {
            RECIPE_JSON
        } else {
            NOT_FOUND_JSON
        };
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Default)]
struct Page {
    screen: Option<Screen>,
    loading: bool,
    alerts: usize,
}

impl RenderTarget for Page {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn render(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }

    fn alert(&mut self, _message: &str) {
        self.alerts += 1;
    }
}

fn page(search_body: &'static str) -> ViewController<FixtureApi, Page> {
    ViewController::new(FixtureApi::new(search_body), Page::default())
}

// ============================================================================
// Flows
// ============================================================================

#[tokio::test]
async fn test_ranked_search_renders_previews() {
    let mut c = page(SEARCH_JSON);
    c.dispatch(ViewAction::Search("paneer".into())).await;

    assert_eq!(c.current_view(), View::Results);
    assert_eq!(c.api().requests.get(), 1);
    assert!(!c.target().loading);

    let Some(Screen::Results(panel)) = &c.target().screen else {
        panic!("expected results panel");
    };
    assert_eq!(
        panel.summary().as_deref(),
        Some("Found 9 recipes! Showing top 2 matches.")
    );
    let ResultsPanel::Found { rows, .. } = panel else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].match_percent, 50);
    assert_eq!(rows[0].missing.text(), "Need: spinach, cream, garlic, ginger...");
    assert_eq!(rows[1].missing, MissingPreview::Complete);
}

#[tokio::test]
async fn test_direct_match_then_back_to_search() {
    let mut c = page(DIRECT_JSON);
    c.dispatch(ViewAction::Search("masala dosa".into())).await;

    let Some(Screen::Recipe(view)) = &c.target().screen else {
        panic!("expected recipe panel");
    };
    assert_eq!(view.title, "Masala Dosa");
    assert_eq!(view.ingredients, vec!["Rice batter", "POTATO"]);

    c.dispatch(ViewAction::GoBack).await;
    assert_eq!(c.current_view(), View::Search);
}

#[tokio::test]
async fn test_malformed_search_body_lands_on_error_panel() {
    let mut c = page("<html>502 Bad Gateway</html>");
    c.dispatch(ViewAction::Search("rice".into())).await;

    assert_eq!(c.current_view(), View::Results);
    assert_eq!(c.target().screen, Some(Screen::Results(ResultsPanel::Failed)));
    assert!(!c.target().loading);
}

#[tokio::test]
async fn test_category_browsing_round_trip() {
    let mut c = page(SEARCH_JSON);
    c.dispatch(ViewAction::BrowseCategories).await;

    let Some(Screen::Categories(groups)) = &c.target().screen else {
        panic!("expected categories panel");
    };
    let veg: Vec<&str> = groups.vegetarian.iter().map(|c| c.name.as_str()).collect();
    let non_veg: Vec<&str> = groups.non_vegetarian.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(veg, vec!["Veg Curry", "Paneer Delight"]);
    assert_eq!(non_veg, vec!["Veggie Soup", "Non-Veg Starters"]);

    c.dispatch(ViewAction::BrowseDishes("Veg Curry".into())).await;
    assert_eq!(c.current_view(), View::Dishes);
    assert_eq!(c.api().requests.get(), 1);

    c.dispatch(ViewAction::ViewRecipe("Aloo Gobi".into())).await;
    let Some(Screen::Recipe(view)) = &c.target().screen else {
        panic!("expected recipe panel");
    };
    assert_eq!(view.ingredients, vec!["Potato", "Cauliflower"]);
    assert_eq!(view.instructions, vec!["Chop.", "Cook."]);

    c.dispatch(ViewAction::GoBack).await;
    assert_eq!(c.current_view(), View::Dishes);

    // The dishes panel's own back button reloads the categories
    c.dispatch(ViewAction::BrowseCategories).await;
    assert_eq!(c.current_view(), View::Categories);
    assert_eq!(c.navigation().previous(), View::Categories);
    assert_eq!(c.api().requests.get(), 3);
}

#[tokio::test]
async fn test_missing_recipe_leaves_page_alone() {
    let mut c = page(SEARCH_JSON);
    c.dispatch(ViewAction::Search("paneer".into())).await;
    let before = c.target().screen.clone();

    c.dispatch(ViewAction::ViewRecipe("Palak Paneer".into())).await;

    assert_eq!(c.current_view(), View::Results);
    assert_eq!(c.target().screen, before);
    assert_eq!(c.target().alerts, 1);
    assert!(!c.target().loading);
}

#[tokio::test]
async fn test_blank_search_is_blocked() {
    let mut c = page(SEARCH_JSON);
    c.dispatch(ViewAction::Search("    ".into())).await;

    assert_eq!(c.api().requests.get(), 0);
    assert_eq!(c.target().alerts, 1);
    assert!(c.target().screen.is_none());
}

#[tokio::test]
async fn test_null_recipes_show_empty_state() {
    let mut c = page(NULL_RECIPES_JSON);
    c.dispatch(ViewAction::Search("saffron".into())).await;

    assert_eq!(c.current_view(), View::Results);
    assert_eq!(c.target().screen, Some(Screen::Results(ResultsPanel::Empty)));
}

#[tokio::test]
async fn test_null_dishes_empty_only_that_category() {
    let api = FixtureApi::new(SEARCH_JSON).with_categories(NULL_DISHES_JSON);
    let mut c = ViewController::new(api, Page::default());
    c.dispatch(ViewAction::BrowseCategories).await;
    assert_eq!(c.categories().len(), 2);

    c.dispatch(ViewAction::BrowseDishes("Chef Specials".into())).await;
    assert_eq!(
        c.target().screen,
        Some(Screen::Dishes(DishList {
            category: "Chef Specials".to_string(),
            dishes: vec![],
        }))
    );

    c.dispatch(ViewAction::BrowseDishes("Veg Curry".into())).await;
    let Some(Screen::Dishes(list)) = &c.target().screen else {
        panic!("expected dishes panel");
    };
    assert_eq!(list.dishes, vec!["Aloo Gobi", "Chana Masala"]);
}
