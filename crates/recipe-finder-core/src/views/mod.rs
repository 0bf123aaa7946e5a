//! View models for every panel the page can show.
//!
//! The controller never builds markup. It produces a [`Screen`] and the UI
//! layer maps each variant to nodes, inserting every string from here as
//! text. Display text therefore can't be interpreted as markup.

mod categories;
mod recipe;
mod results;

pub use categories::{classify, CategoryCard, CategoryGroups, Diet, DishList, NON_VEG_KEYWORDS};
pub use recipe::{capitalize_first, RecipeView};
pub use results::{MissingPreview, ResultRow, ResultsPanel};

use crate::navigation::View;

/// The single visible panel and everything needed to draw it.
///
/// Rendering a `Screen` replaces whatever was visible before.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Search,
    About,
    Results(ResultsPanel),
    Categories(CategoryGroups),
    Dishes(DishList),
    Recipe(RecipeView),
}

impl Screen {
    /// The view this screen belongs to.
    pub fn view(&self) -> View {
        match self {
            Screen::Search => View::Search,
            Screen::About => View::About,
            Screen::Results(_) => View::Results,
            Screen::Categories(_) => View::Categories,
            Screen::Dishes(_) => View::Dishes,
            Screen::Recipe(_) => View::Recipe,
        }
    }

    /// Whether the search box is visible alongside this screen.
    ///
    /// Only the about panel hides it.
    pub fn shows_search_bar(&self) -> bool {
        !matches!(self, Screen::About)
    }
}
