//! View navigation state machine.
//!
//! Exactly one [`View`] is current at a time. One extra slot remembers the
//! view to return to, which is all the history the page keeps: there is no
//! stack, and `previous` is whatever the last transition recorded.
//!
//! # Transition table
//!
//! ```text
//! event               current    previous
//! ------------------  ---------  ---------------------------------------
//! SearchCompleted     Results    Search
//! DirectMatch         Recipe     Search
//! CategoriesLoaded    Categories Categories if from Dishes, else Search
//! DishesOpened        Dishes     Categories
//! RecipeOpened        Recipe     <old current>
//! Restored(v)         v          unchanged
//! Home                Search     unchanged
//! AboutOpened         About      unchanged
//! AboutClosed         Search     unchanged
//! ```

/// One of the mutually exclusive full-panel states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Search,
    Results,
    Categories,
    Dishes,
    Recipe,
    About,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Search => "search",
            View::Results => "results",
            View::Categories => "categories",
            View::Dishes => "dishes",
            View::Recipe => "recipe",
            View::About => "about",
        }
    }
}

/// Something that moves the page to a new view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A search landed on the results panel (including empty and failed searches).
    SearchCompleted,
    /// A search named exactly one recipe.
    DirectMatch,
    /// The category index was (re)loaded and rendered.
    CategoriesLoaded,
    /// A category's dish list was opened.
    DishesOpened,
    /// A recipe was fetched and rendered.
    RecipeOpened,
    /// A previously rendered panel was shown again without refetching.
    Restored(View),
    /// The search panel was shown on its own.
    Home,
    AboutOpened,
    AboutClosed,
}

/// Where "back" leads from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    /// Re-show the last results panel.
    Results,
    /// Re-show the last dish list.
    Dishes,
    /// Refetch and render the category index.
    Categories,
    /// Show the search panel.
    Search,
}

/// Current view plus the one view "back" returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    current: View,
    previous: View,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn previous(&self) -> View {
        self.previous
    }

    /// Applies `event` and returns the new current view.
    pub fn apply(&mut self, event: NavEvent) -> View {
        let (current, previous) = match event {
            NavEvent::SearchCompleted => (View::Results, View::Search),
            NavEvent::DirectMatch => (View::Recipe, View::Search),
            NavEvent::CategoriesLoaded => {
                let previous = if self.current == View::Dishes {
                    View::Categories
                } else {
                    View::Search
                };
                (View::Categories, previous)
            }
            NavEvent::DishesOpened => (View::Dishes, View::Categories),
            NavEvent::RecipeOpened => (View::Recipe, self.current),
            NavEvent::Restored(view) => (view, self.previous),
            NavEvent::Home | NavEvent::AboutClosed => (View::Search, self.previous),
            NavEvent::AboutOpened => (View::About, self.previous),
        };

        self.current = current;
        self.previous = previous;
        current
    }

    /// Resolves "back" from the stored previous view alone.
    pub fn back_target(&self) -> BackTarget {
        match self.previous {
            View::Results => BackTarget::Results,
            View::Dishes => BackTarget::Dishes,
            View::Categories => BackTarget::Categories,
            View::Search | View::Recipe | View::About => BackTarget::Search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_search() {
        let nav = Navigation::new();
        assert_eq!(nav.current(), View::Search);
        assert_eq!(nav.previous(), View::Search);
        assert_eq!(nav.back_target(), BackTarget::Search);
    }

    #[test]
    fn test_search_results_back_to_search() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::SearchCompleted);
        assert_eq!(nav.current(), View::Results);
        assert_eq!(nav.back_target(), BackTarget::Search);
    }

    #[test]
    fn test_dishes_back_to_categories() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::CategoriesLoaded);
        nav.apply(NavEvent::DishesOpened);
        assert_eq!(nav.back_target(), BackTarget::Categories);
    }

    #[test]
    fn test_categories_from_dishes_remembers_categories() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::CategoriesLoaded);
        assert_eq!(nav.previous(), View::Search);

        nav.apply(NavEvent::DishesOpened);
        nav.apply(NavEvent::CategoriesLoaded);
        assert_eq!(nav.current(), View::Categories);
        assert_eq!(nav.previous(), View::Categories);
    }

    #[test]
    fn test_recipe_remembers_where_it_was_opened() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::SearchCompleted);
        nav.apply(NavEvent::RecipeOpened);
        assert_eq!(nav.current(), View::Recipe);
        assert_eq!(nav.back_target(), BackTarget::Results);

        let mut nav = Navigation::new();
        nav.apply(NavEvent::CategoriesLoaded);
        nav.apply(NavEvent::DishesOpened);
        nav.apply(NavEvent::RecipeOpened);
        assert_eq!(nav.back_target(), BackTarget::Dishes);
    }

    #[test]
    fn test_direct_match_goes_back_to_search() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::CategoriesLoaded);
        nav.apply(NavEvent::DirectMatch);
        assert_eq!(nav.current(), View::Recipe);
        assert_eq!(nav.back_target(), BackTarget::Search);
    }

    #[test]
    fn test_history_is_one_level_deep() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::SearchCompleted);
        nav.apply(NavEvent::RecipeOpened);
        nav.apply(NavEvent::Restored(View::Results));
        // Back from the restored results panel no longer reaches the recipe
        assert_eq!(nav.current(), View::Results);
        assert_eq!(nav.previous(), View::Results);
    }

    #[test]
    fn test_home_and_about_keep_previous() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::CategoriesLoaded);
        nav.apply(NavEvent::DishesOpened);
        nav.apply(NavEvent::AboutOpened);
        assert_eq!(nav.current(), View::About);
        assert_eq!(nav.previous(), View::Categories);

        nav.apply(NavEvent::AboutClosed);
        assert_eq!(nav.current(), View::Search);
        nav.apply(NavEvent::Home);
        assert_eq!(nav.previous(), View::Categories);
    }

    #[test]
    fn test_back_target_from_recipe_or_about_is_search() {
        let mut nav = Navigation::new();
        nav.apply(NavEvent::DirectMatch);
        nav.apply(NavEvent::RecipeOpened);
        assert_eq!(nav.previous(), View::Recipe);
        assert_eq!(nav.back_target(), BackTarget::Search);
    }
}
