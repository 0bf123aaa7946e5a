//! Category browsing: the diet-split category grid and a category's dish list.

mod categories_view;
mod dishes_view;

pub use categories_view::CategoriesView;
pub use dishes_view::DishesView;
