use dioxus::prelude::*;
use studio_ui::ProductPage;

#[component]
pub fn Product() -> Element {
    rsx! {
        ProductPage {}
    }
}
