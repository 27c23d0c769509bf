//! studio mocks - Component gallery for the print studio
//!
//! Renders each component with fixture data and an auto-generated control
//! panel. Control state lives in the URL so a configured mock can be shared
//! or screenshotted.

pub mod demo_data;
pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{MockHelloWorld, MockIndex, MockProductPage};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/hello-world?:state")]
    MockHelloWorld { state: Option<String> },
    #[route("/product-page?:state")]
    MockProductPage { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Print Studio Mocks" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
