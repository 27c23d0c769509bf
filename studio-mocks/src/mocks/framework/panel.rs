//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlKind, ControlRegistry};
use super::viewport::MockViewport;
use crate::Route;
use dioxus::prelude::*;

/// Every mock page in the gallery
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockPage {
    HelloWorld,
    ProductPage,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[MockPage::HelloWorld, MockPage::ProductPage];

    pub fn label(self) -> &'static str {
        match self {
            MockPage::HelloWorld => "HelloWorld",
            MockPage::ProductPage => "ProductPage",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MockPage::HelloWorld => "Greeting paragraph",
            MockPage::ProductPage => "Image upload, measurements, product type and print text",
        }
    }

    pub fn to_route(self, state: Option<String>) -> Route {
        match self {
            MockPage::HelloWorld => Route::MockHelloWorld { state },
            MockPage::ProductPage => Route::MockProductPage { state },
        }
    }
}

/// Main mock panel component that renders controls, presets, and viewport
#[component]
pub fn MockPanel(current_mock: MockPage, registry: ControlRegistry, children: Element) -> Element {
    let title = current_mock.label();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-6xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "max-w-6xl mx-auto p-6",
                MockViewport { {children} }
            }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in &registry.presets {
                button {
                    class: if registry.matches_preset(preset) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Auto-generated controls row: enums as button groups, then checkboxes,
/// then text fields
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let of_kind = |pred: fn(&ControlKind) -> bool| -> Vec<ControlDef> {
        registry
            .controls
            .iter()
            .filter(|c| pred(&c.kind))
            .cloned()
            .collect()
    };
    let enum_controls = of_kind(|k| matches!(k, ControlKind::Enum(_)));
    let bool_controls = of_kind(|k| matches!(k, ControlKind::Bool));
    let text_controls = of_kind(|k| matches!(k, ControlKind::Text { .. }));

    rsx! {
        for control in enum_controls {
            div { class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-gray-500 w-20", "{control.label}" }
                if let ControlKind::Enum(options) = &control.kind {
                    for (value , label) in options.iter().copied() {
                        EnumButton {
                            registry: registry.clone(),
                            control_key: control.key,
                            value,
                            label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }

        if !bool_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 text-sm mb-3",
                for control in bool_controls {
                    BoolCheckbox {
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }

        for control in text_controls {
            TextControl {
                registry: registry.clone(),
                control_key: control.key,
                label: control.label,
                multiline: matches!(control.kind, ControlKind::Text { multiline: true }),
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
            if doc.is_some() {
                span { class: "text-gray-600", "ⓘ" }
            }
        }
    }
}

/// Free-form text control
#[component]
fn TextControl(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    multiline: bool,
) -> Element {
    let current = registry.get_string(control_key);
    let class = "w-full max-w-md px-2 py-1 text-sm rounded bg-gray-900 text-gray-200 border border-gray-700";

    rsx! {
        label { class: "flex items-start gap-2 text-sm text-gray-400 mb-2",
            span { class: "w-20 text-xs text-gray-500 pt-1", "{label}" }
            if multiline {
                textarea {
                    class,
                    rows: "3",
                    value: "{current}",
                    oninput: move |e| registry.set_string(control_key, e.value()),
                }
            } else {
                input {
                    r#type: "text",
                    class,
                    value: "{current}",
                    oninput: move |e| registry.set_string(control_key, e.value()),
                }
            }
        }
    }
}
