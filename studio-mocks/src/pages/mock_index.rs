//! Mock pages with URL state persistence

use crate::mocks::framework::MockPage;
use crate::mocks::{HelloWorldMock, ProductPageMock};
use crate::Route;
use dioxus::prelude::*;
use studio_ui::HelloWorld;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "print studio mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Specimens" }
            div { class: "grid grid-cols-3 gap-4 mb-8",
                SpecimenCard {
                    title: "HelloWorld",
                    to: MockPage::HelloWorld.to_route(None),
                    div { class: "bg-white rounded p-2", HelloWorld {} }
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                for page in MockPage::ALL.iter().copied() {
                    LinkCard {
                        to: page.to_route(None),
                        title: page.label(),
                        description: page.description(),
                    }
                }
            }
        }
    }
}

/// A card-style navigation link with title and description
#[component]
fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{title}" }
            div { class: "text-sm text-gray-400", "{description}" }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

// ============================================================================
// HelloWorld page wrapper
// ============================================================================

#[component]
pub fn MockHelloWorld(state: Option<String>) -> Element {
    rsx! {
        HelloWorldMock { initial_state: state }
    }
}

// ============================================================================
// ProductPage page wrapper
// ============================================================================

#[component]
pub fn MockProductPage(state: Option<String>) -> Element {
    rsx! {
        ProductPageMock { initial_state: state }
    }
}
