//! HelloWorld mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use studio_ui::{HelloWorld, DEFAULT_GREETING};

#[component]
pub fn HelloWorldMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .text_control("greeting", "Greeting", DEFAULT_GREETING, false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Custom").set_string("greeting", "Hello, print studio!"),
            Preset::new("Empty").set_string("greeting", ""),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::HelloWorld);

    let greeting = registry.get_string("greeting");

    rsx! {
        MockPanel { current_mock: MockPage::HelloWorld, registry,
            div { class: "p-8",
                HelloWorld { greeting }
            }
        }
    }
}
