use dioxus::prelude::*;

/// Full-page spinner shown while a backend request is in flight
#[component]
pub fn LoadingOverlay(visible: ReadSignal<bool>) -> Element {
    if !visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "rf-overlay rf-loading", "aria-busy": "true",
            div { class: "rf-spinner" }
            p { class: "rf-loading-text", "Cooking up results…" }
        }
    }
}
