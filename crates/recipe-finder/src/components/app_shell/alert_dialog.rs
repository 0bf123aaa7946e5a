use dioxus::prelude::*;

/// Modal message the user has to dismiss before doing anything else.
///
/// Rendered whenever `message` holds a value; closing it clears the signal.
#[component]
pub fn AlertDialog(message: Signal<Option<String>>) -> Element {
    let Some(text) = message.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "rf-overlay",
            div {
                class: "rf-dialog",
                role: "alertdialog",
                "aria-modal": "true",
                p { class: "rf-dialog-text", "{text}" }
                button {
                    class: "rf-btn rf-btn--primary",
                    autofocus: true,
                    onclick: move |_| message.set(None),
                    "OK"
                }
            }
        }
    }
}
