//! Hello world demo component

use dioxus::prelude::*;

pub const DEFAULT_GREETING: &str = "Hello from Dioxus + Tailwind + Mocks!";

/// A single blue greeting paragraph
#[component]
pub fn HelloWorld(#[props(default = DEFAULT_GREETING.to_string())] greeting: String) -> Element {
    rsx! {
        p { class: "text-blue-600", "data-testid": "hello-world", "{greeting}" }
    }
}
