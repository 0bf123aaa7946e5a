use dioxus::prelude::*;
use recipe_finder_core::views::{MissingPreview, ResultRow};
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// One ranked recipe. Clicking anywhere on the card opens the recipe.
#[component]
pub fn ResultCard(row: ResultRow) -> Element {
    let actions = use_actions();

    let match_line = row.match_line();
    let missing_text = row.missing.text();
    let missing_class = match row.missing {
        MissingPreview::Complete => "rf-recipe-missing rf-recipe-missing--complete",
        MissingPreview::Needs { .. } => "rf-recipe-missing",
    };
    let name = row.name.clone();

    rsx! {
        article {
            class: "rf-recipe-card",
            onclick: move |_| actions.send(ViewAction::ViewRecipe(name.clone())),
            h3 { class: "rf-recipe-card-title", "{row.name}" }
            div { class: "rf-recipe-match", "{match_line}" }
            div { class: missing_class, "{missing_text}" }
        }
    }
}
