//! Print studio web app
//!
//! Serves the product customization page at `/` and the hello world demo at
//! `/hello`.

mod pages;

use dioxus::prelude::*;
use pages::{AppLayout, Hello, Product};
use studio_core::StudioConfig;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Product {},
    #[route("/hello")]
    Hello {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(StudioConfig::default);

    rsx! {
        document::Title { "Print Studio" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
