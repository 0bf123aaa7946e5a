use dioxus::prelude::*;
use recipe_finder_core::views::{CategoryCard, CategoryGroups, Diet};
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// Categories panel with vegetarian and non-vegetarian groups
#[component]
pub fn CategoriesView(groups: CategoryGroups) -> Element {
    let actions = use_actions();

    rsx! {
        section { class: "rf-view rf-view--categories",
            header { class: "rf-view-header",
                button {
                    class: "rf-btn rf-btn--ghost",
                    onclick: move |_| actions.send(ViewAction::ShowSearch),
                    "← Back"
                }
                h2 { class: "rf-view-title", "Recipe Categories" }
            }

            for (diet, cards) in groups.groups() {
                div { key: "{diet:?}", class: "rf-category-type",
                    h3 { class: "rf-category-type-title", {diet.title()} }
                    div { class: "rf-category-type-grid",
                        for card in cards.iter() {
                            CategoryTile {
                                key: "{card.name}",
                                card: card.clone(),
                                diet,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryTile(card: CategoryCard, diet: Diet) -> Element {
    let actions = use_actions();
    let name = card.name.clone();
    let class = format!("rf-category-card rf-category-card--{}", diet.class_suffix());

    rsx! {
        article {
            class: "{class}",
            onclick: move |_| actions.send(ViewAction::BrowseDishes(name.clone())),
            h3 { "{card.name}" }
            div { class: "rf-category-count", {card.count_label()} }
        }
    }
}
