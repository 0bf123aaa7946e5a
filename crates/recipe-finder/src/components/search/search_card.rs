use dioxus::prelude::*;
use recipe_finder_core::config::QUICK_TAGS;
use recipe_finder_core::ViewAction;

use crate::components::{use_actions, use_loading};

/// Search card with ingredient input, search and browse buttons, and quick tags.
///
/// Empty input is still sent: the controller owns that check and alerts.
#[component]
pub fn SearchCard(query: Signal<String>) -> Element {
    let actions = use_actions();
    let loading = use_loading();

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            actions.send(ViewAction::Search(query.read().clone()));
        }
    };

    rsx! {
        section { class: "rf-search-card",
            h1 { class: "rf-search-title", "What's in your kitchen?" }
            div { class: "rf-search-input-row",
                input {
                    class: "rf-search-input",
                    r#type: "text",
                    placeholder: "Enter ingredients (paneer, tomato…) or a dish name",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeypress: handle_keypress,
                }
                button {
                    class: "rf-btn rf-btn--primary",
                    disabled: loading(),
                    onclick: move |_| actions.send(ViewAction::Search(query.read().clone())),
                    span { class: "rf-btn-icon", "🔍" }
                    "Find Recipes"
                }
                button {
                    class: "rf-btn rf-btn--secondary",
                    disabled: loading(),
                    onclick: move |_| actions.send(ViewAction::BrowseCategories),
                    span { class: "rf-btn-icon", "📋" }
                    "Browse Categories"
                }
            }
            QuickTags { query }
        }
    }
}

/// Preset ingredient lists; clicking one fills the input and searches.
#[component]
pub fn QuickTags(query: Signal<String>) -> Element {
    rsx! {
        div { class: "rf-quick-tags",
            span { class: "rf-quick-tags-label", "Try:" }
            for (label, ingredients) in QUICK_TAGS.iter() {
                QuickTag {
                    key: "{label}",
                    label: label.to_string(),
                    ingredients: ingredients.to_string(),
                    query,
                }
            }
        }
    }
}

#[component]
fn QuickTag(label: String, ingredients: String, query: Signal<String>) -> Element {
    let actions = use_actions();

    rsx! {
        button {
            class: "rf-tag",
            onclick: move |_| {
                query.set(ingredients.clone());
                actions.send(ViewAction::Search(ingredients.clone()));
            },
            "{label}"
        }
    }
}
