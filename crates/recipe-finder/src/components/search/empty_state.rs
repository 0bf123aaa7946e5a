use dioxus::prelude::*;
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// Empty state shown when a search matched nothing
#[component]
pub fn EmptyState() -> Element {
    let actions = use_actions();

    rsx! {
        div { class: "rf-empty-state",
            h3 { class: "rf-empty-title", "No recipes found" }
            p { class: "rf-empty-text", "Try different ingredients or browse categories" }
            button {
                class: "rf-btn rf-btn--secondary",
                onclick: move |_| actions.send(ViewAction::BrowseCategories),
                span { class: "rf-btn-icon", "📋" }
                "Browse Categories"
            }
        }
    }
}

/// Error panel shown when the search request itself failed
#[component]
pub fn SearchFailed() -> Element {
    rsx! {
        div { class: "rf-empty-state rf-empty-state--error",
            h3 { class: "rf-empty-title", "Oops! Something went wrong" }
            p { class: "rf-empty-text", "Please try again later" }
        }
    }
}
