use dioxus::prelude::*;
use studio_ui::HelloWorld;

#[component]
pub fn Hello() -> Element {
    rsx! {
        div { class: "p-8", HelloWorld {} }
    }
}
