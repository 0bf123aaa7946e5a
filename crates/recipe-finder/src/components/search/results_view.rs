use dioxus::prelude::*;
use recipe_finder_core::views::ResultsPanel;
use recipe_finder_core::ViewAction;

use crate::components::use_actions;

use super::empty_state::SearchFailed;
use super::{EmptyState, ResultCard};

/// Results panel: ranked recipe cards, the empty state, or the error panel
#[component]
pub fn ResultsView(panel: ResultsPanel) -> Element {
    let actions = use_actions();

    let summary = panel
        .summary()
        .map(|text| rsx! { p { class: "rf-results-info", "{text}" } });

    let grid = match panel {
        ResultsPanel::Found { rows, .. } => rsx! {
            for (idx, row) in rows.into_iter().enumerate() {
                ResultCard { key: "{idx}", row }
            }
        },
        ResultsPanel::Empty => rsx! { EmptyState {} },
        ResultsPanel::Failed => rsx! { SearchFailed {} },
    };

    rsx! {
        section { class: "rf-view rf-view--results",
            header { class: "rf-view-header",
                button {
                    class: "rf-btn rf-btn--ghost",
                    onclick: move |_| actions.send(ViewAction::ShowSearch),
                    "← Back"
                }
                h2 { class: "rf-view-title", "Matching Recipes" }
            }

            {summary}

            div { class: "rf-results-grid", {grid} }
        }
    }
}
