use dioxus::prelude::*;
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// Global app bar with logo and the about link
#[component]
pub fn AppBar() -> Element {
    let actions = use_actions();

    rsx! {
        header { class: "rf-appbar",
            div { class: "rf-appbar-left",
                button {
                    class: "rf-logo",
                    onclick: move |_| actions.send(ViewAction::ShowSearch),
                    "aria-label": "Back to search",
                    span { class: "rf-logo-word", "Recipe" }
                    span { class: "rf-logo-word rf-logo-word--accent", "Finder" }
                }
            }
            nav { class: "rf-appbar-right",
                button {
                    class: "rf-nav-link",
                    onclick: move |_| actions.send(ViewAction::ShowAbout),
                    "About"
                }
            }
        }
    }
}
