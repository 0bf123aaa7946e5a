//! UI components for the Recipe Finder page.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar, LoadingOverlay, AlertDialog, Footer
//! - `search`: SearchCard, QuickTags, ResultsView, ResultCard, EmptyState
//! - `browse`: CategoriesView, DishesView
//! - `recipe`: RecipeDetail
//! - `about`: AboutPanel
//!
//! # Data flow
//!
//! [`App`] owns three signals (the visible [`Screen`], the loading flag and
//! the pending alert) and a coroutine that owns the [`ViewController`].
//! Components never touch the controller directly; they send a
//! [`ViewAction`] through the coroutine:
//!
//! ```ignore
//! let actions = use_actions();
//! actions.send(ViewAction::ViewRecipe(name.clone()));
//! ```
//!
//! The coroutine handles one action at a time and the controller writes the
//! outcome back into the signals, which re-renders the page.

mod about;
mod app_shell;
mod browse;
mod recipe;
pub mod search;

pub use about::AboutPanel;
pub use app_shell::{AlertDialog, AppBar, Footer, LoadingOverlay};
pub use browse::{CategoriesView, DishesView};
pub use recipe::RecipeDetail;
pub use search::{ResultsView, SearchCard};

use crate::platform::api_config;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use recipe_finder_core::api::HttpRecipeApi;
use recipe_finder_core::render::RenderTarget;
use recipe_finder_core::views::Screen;
use recipe_finder_core::{ViewAction, ViewController};

/// [`RenderTarget`] backed by the App's signals.
#[derive(Clone, Copy)]
struct SignalTarget {
    screen: Signal<Screen>,
    loading: Signal<bool>,
    alert: Signal<Option<String>>,
}

impl RenderTarget for SignalTarget {
    fn set_loading(&mut self, visible: bool) {
        self.loading.set(visible);
    }

    fn render(&mut self, screen: Screen) {
        self.screen.set(screen);
    }

    fn alert(&mut self, message: &str) {
        self.alert.set(Some(message.to_string()));
    }
}

/// Context provider for sending user actions to the controller coroutine
pub fn use_actions() -> Coroutine<ViewAction> {
    use_context::<Coroutine<ViewAction>>()
}

/// Context provider for the loading flag (search controls are disabled while set)
pub fn use_loading() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

#[component]
pub fn App() -> Element {
    let screen = use_signal(Screen::default);
    let loading = use_signal(|| false);
    let alert = use_signal(|| None::<String>);
    let query = use_signal(String::new);
    use_context_provider(|| loading);

    let actions = use_coroutine(move |mut rx: UnboundedReceiver<ViewAction>| async move {
        let mut target = SignalTarget {
            screen,
            loading,
            alert,
        };

        let config = api_config();
        let api = match HttpRecipeApi::new(&config) {
            Ok(api) => api,
            Err(e) => {
                error!("Failed to create API client for {}: {}", config.base_url, e);
                target.alert("The recipe service is unavailable. Please try again later");
                return;
            }
        };
        info!("Using recipe API at {}", config.base_url);

        let mut controller = ViewController::new(api, target);
        while let Some(action) = rx.next().await {
            controller.dispatch(action).await;
        }
    });
    use_context_provider(|| actions);

    let current = screen.read().clone();
    let show_search_bar = current.shows_search_bar();
    let body = match current {
        Screen::Search => rsx! {},
        Screen::About => rsx! { AboutPanel {} },
        Screen::Results(panel) => rsx! { ResultsView { panel } },
        Screen::Categories(groups) => rsx! { CategoriesView { groups } },
        Screen::Dishes(list) => rsx! { DishesView { list } },
        Screen::Recipe(recipe) => rsx! { RecipeDetail { recipe } },
    };

    rsx! {
        div { class: "rf-app",
            AppBar {}

            main { class: "rf-main",
                if show_search_bar {
                    SearchCard { query }
                }
                {body}
            }

            Footer {}

            LoadingOverlay { visible: loading }
            AlertDialog { message: alert }
        }
    }
}
