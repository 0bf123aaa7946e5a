//! The view controller: user intent in, one visible panel out.
//!
//! Each operation makes at most one backend call, moves the [`Navigation`]
//! state machine, and renders a full [`Screen`]. Failures never escape: they
//! are logged and turned into an error panel, an empty panel, or an alert.
//!
//! # Examples
//!
//! ```ignore
//! let api = HttpRecipeApi::new(&ApiConfig::default())?;
//! let mut controller = ViewController::new(api, target);
//!
//! controller.search("paneer, onion").await;
//! controller.view_recipe("Paneer Butter Masala").await;
//! controller.go_back().await; // back to the results panel
//! ```

use crate::api::{CategoryIndex, RecipeApi, RecipeLookup};
use crate::config::{EMPTY_QUERY_ALERT, RECIPE_FAILED_ALERT, RECIPE_NOT_FOUND_ALERT};
use crate::navigation::{BackTarget, NavEvent, Navigation, View};
use crate::render::RenderTarget;
use crate::views::{CategoryGroups, DishList, RecipeView, ResultsPanel, Screen};
use tracing::{debug, error, info, warn};

/// Everything a user can ask the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Search(String),
    BrowseCategories,
    BrowseDishes(String),
    ViewRecipe(String),
    GoBack,
    ShowSearch,
    ShowAbout,
    HideAbout,
}

pub struct ViewController<A, R> {
    api: A,
    target: R,
    nav: Navigation,
    categories: CategoryIndex,
    // Last rendered panels, re-shown by "back" without refetching
    last_results: Option<ResultsPanel>,
    last_dishes: Option<DishList>,
}

impl<A: RecipeApi, R: RenderTarget> ViewController<A, R> {
    pub fn new(api: A, target: R) -> Self {
        Self {
            api,
            target,
            nav: Navigation::new(),
            categories: CategoryIndex::new(),
            last_results: None,
            last_dishes: None,
        }
    }

    pub fn navigation(&self) -> Navigation {
        self.nav
    }

    pub fn current_view(&self) -> View {
        self.nav.current()
    }

    /// The category index from the most recent category fetch.
    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// Runs one user action to completion.
    pub async fn dispatch(&mut self, action: ViewAction) {
        debug!("Dispatching {:?} from {}", action, self.nav.current().label());
        match action {
            ViewAction::Search(query) => self.search(&query).await,
            ViewAction::BrowseCategories => self.browse_categories().await,
            ViewAction::BrowseDishes(category) => self.browse_dishes(&category),
            ViewAction::ViewRecipe(name) => self.view_recipe(&name).await,
            ViewAction::GoBack => self.go_back().await,
            ViewAction::ShowSearch => self.show_search(),
            ViewAction::ShowAbout => self.show_about(),
            ViewAction::HideAbout => self.hide_about(),
        }
    }

    /// Searches by ingredients or dish name.
    ///
    /// Empty input raises an alert and sends nothing. Otherwise the page always
    /// lands on the recipe panel (direct match) or the results panel (ranked
    /// list, no matches, or a failed request).
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.target.alert(EMPTY_QUERY_ALERT);
            return;
        }

        info!("🔍 Searching for: '{}'", query);
        self.target.set_loading(true);
        let result = self.api.search(query).await;
        self.target.set_loading(false);

        match result {
            Ok(response) => match response.direct_recipe() {
                Some(recipe) => {
                    info!("Direct match: {}", recipe.name);
                    self.show(NavEvent::DirectMatch, Screen::Recipe(RecipeView::from(recipe)));
                }
                None => {
                    let panel = ResultsPanel::from_response(&response);
                    info!("✅ Search returned {} recipes", response.recipes.len());
                    self.show_results(panel);
                }
            },
            Err(e) => {
                error!("❌ Search failed: {}", e);
                self.show_results(ResultsPanel::Failed);
            }
        }
    }

    /// Fetches the category index and shows it split by diet.
    ///
    /// A failed fetch clears the cached index and shows empty groups.
    pub async fn browse_categories(&mut self) {
        self.target.set_loading(true);
        let result = self.api.categories().await;
        self.target.set_loading(false);

        self.categories = match result {
            Ok(index) => {
                info!("Loaded {} categories", index.len());
                index
            }
            Err(e) => {
                error!("❌ Failed to load categories: {}", e);
                CategoryIndex::new()
            }
        };

        let groups = CategoryGroups::from_index(&self.categories);
        self.show(NavEvent::CategoriesLoaded, Screen::Categories(groups));
    }

    /// Shows the dishes of `category` from the cached index. No network.
    pub fn browse_dishes(&mut self, category: &str) {
        let dishes = DishList::lookup(&self.categories, category);
        if dishes.dishes.is_empty() {
            warn!("No dishes cached for category '{}'", category);
        }

        self.last_dishes = Some(dishes.clone());
        self.show(NavEvent::DishesOpened, Screen::Dishes(dishes));
    }

    /// Fetches and shows one recipe.
    ///
    /// Not-found and failed fetches raise an alert and leave the view as it was.
    pub async fn view_recipe(&mut self, name: &str) {
        self.target.set_loading(true);
        let result = self.api.recipe(name).await;
        self.target.set_loading(false);

        match result {
            Ok(RecipeLookup::Found(recipe)) => {
                self.show(NavEvent::RecipeOpened, Screen::Recipe(RecipeView::from(&recipe)));
            }
            Ok(RecipeLookup::NotFound { error }) => {
                warn!("Recipe '{}' not found: {}", name, error);
                self.target.alert(RECIPE_NOT_FOUND_ALERT);
            }
            Err(e) => {
                error!("❌ Failed to load recipe '{}': {}", name, e);
                self.target.alert(RECIPE_FAILED_ALERT);
            }
        }
    }

    /// Returns to the view recorded as previous.
    ///
    /// Results and dishes come back as last rendered; categories are fetched
    /// again.
    pub async fn go_back(&mut self) {
        match self.nav.back_target() {
            BackTarget::Results => match self.last_results.clone() {
                Some(panel) => self.show(NavEvent::Restored(View::Results), Screen::Results(panel)),
                None => self.show_search(),
            },
            BackTarget::Dishes => match self.last_dishes.clone() {
                Some(dishes) => self.show(NavEvent::Restored(View::Dishes), Screen::Dishes(dishes)),
                None => self.show_search(),
            },
            BackTarget::Categories => self.browse_categories().await,
            BackTarget::Search => self.show_search(),
        }
    }

    /// Shows only the search panel.
    pub fn show_search(&mut self) {
        self.show(NavEvent::Home, Screen::Search);
    }

    pub fn show_about(&mut self) {
        self.show(NavEvent::AboutOpened, Screen::About);
    }

    pub fn hide_about(&mut self) {
        self.show(NavEvent::AboutClosed, Screen::Search);
    }

    fn show_results(&mut self, panel: ResultsPanel) {
        self.last_results = Some(panel.clone());
        self.show(NavEvent::SearchCompleted, Screen::Results(panel));
    }

    fn show(&mut self, event: NavEvent, screen: Screen) {
        let view = self.nav.apply(event);
        debug_assert_eq!(view, screen.view());
        self.target.render(screen);
    }
}
