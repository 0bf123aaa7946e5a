use dioxus::prelude::*;
use recipe_finder::components::App as RecipeFinderApp;

const MAIN_CSS: Asset = asset!("/assets/recipe-finder.css");

fn main() {
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Recipe Finder")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1000.0, 800.0))
                .with_min_inner_size(LogicalSize::new(480.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! stylesheets don't load on desktop, inline them there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/recipe-finder.css")} }
        }

        body { class: "rf-body",
            RecipeFinderApp {}
        }
    }
}
