use dioxus::prelude::*;
use recipe_finder_core::views::RecipeView;
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// Recipe detail: title, ingredient list, numbered steps
#[component]
pub fn RecipeDetail(recipe: RecipeView) -> Element {
    let actions = use_actions();

    rsx! {
        section { class: "rf-view rf-view--recipe",
            header { class: "rf-view-header",
                button {
                    class: "rf-btn rf-btn--ghost",
                    onclick: move |_| actions.send(ViewAction::GoBack),
                    "← Back"
                }
                h2 { class: "rf-recipe-title", "{recipe.title}" }
            }

            div { class: "rf-recipe-body",
                div { class: "rf-recipe-section",
                    h3 { "🥘 Ingredients" }
                    ul { class: "rf-ingredients-list",
                        for (idx, ingredient) in recipe.ingredients.iter().enumerate() {
                            li { key: "{idx}", "{ingredient}" }
                        }
                    }
                }
                div { class: "rf-recipe-section",
                    h3 { "👩‍🍳 Instructions" }
                    ol { class: "rf-instructions-list",
                        for (idx, step) in recipe.instructions.iter().enumerate() {
                            li { key: "{idx}", "{step}" }
                        }
                    }
                }
            }
        }
    }
}
