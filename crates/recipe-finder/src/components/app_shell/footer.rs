use dioxus::prelude::*;

/// Footer with a short note on where recipes come from
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "rf-footer",
            span { class: "rf-footer-text",
                "Recipe Finder • Tell us what's in your kitchen, we'll find something to cook."
            }
        }
    }
}
