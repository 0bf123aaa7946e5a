use dioxus::prelude::*;
use recipe_finder_core::views::DishList;
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// Dish list for one category. Back reloads the categories.
#[component]
pub fn DishesView(list: DishList) -> Element {
    let actions = use_actions();

    rsx! {
        section { class: "rf-view rf-view--dishes",
            header { class: "rf-view-header",
                button {
                    class: "rf-btn rf-btn--ghost",
                    onclick: move |_| actions.send(ViewAction::BrowseCategories),
                    "← Categories"
                }
                h2 { class: "rf-view-title", "{list.category}" }
            }

            div { class: "rf-dishes-grid",
                for (idx, dish) in list.dishes.iter().enumerate() {
                    DishCard { key: "{idx}", name: dish.clone() }
                }
            }
        }
    }
}

#[component]
fn DishCard(name: String) -> Element {
    let actions = use_actions();
    let label = name.clone();

    rsx! {
        div {
            class: "rf-dish-card",
            onclick: move |_| actions.send(ViewAction::ViewRecipe(name.clone())),
            "{label}"
        }
    }
}
