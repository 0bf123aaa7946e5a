use dioxus::prelude::*;
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

/// About panel. Replaces everything, including the search card, until closed.
#[component]
pub fn AboutPanel() -> Element {
    let actions = use_actions();

    rsx! {
        section { class: "rf-view rf-view--about",
            header { class: "rf-view-header",
                h2 { class: "rf-view-title", "About Recipe Finder" }
                button {
                    class: "rf-icon-button",
                    onclick: move |_| actions.send(ViewAction::HideAbout),
                    "aria-label": "Close about",
                    "✕"
                }
            }
            p {
                "Type the ingredients you have, or the name of a dish, and Recipe Finder "
                "ranks recipes by how many of your ingredients they use."
            }
            p {
                "Each result shows how well it matches and what you would still need. "
                "Prefer to wander? Browse every category, split into vegetarian and "
                "non-vegetarian."
            }
        }
    }
}
