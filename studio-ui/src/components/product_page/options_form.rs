//! Measurement, product and print text form

use dioxus::prelude::*;
use studio_core::{Build, Measurements, ProductType};

const LABEL: &str = "block text-sm mb-1";
const FIELD: &str = "w-full p-2 rounded border";

/// Right half of the product page
#[component]
pub fn OptionsForm(
    product_type: ProductType,
    measurements: Measurements,
    custom_text: String,
    text_max_chars: usize,
    text_label: String,
    selected_label: String,
    layout_label: String,
    on_text_input: EventHandler<String>,
    on_product_change: EventHandler<String>,
    on_height_change: EventHandler<String>,
    on_weight_change: EventHandler<String>,
    on_build_change: EventHandler<String>,
) -> Element {
    let Measurements {
        height,
        weight,
        build: selected_build,
    } = measurements;

    rsx! {
        div { class: "bg-gray-200 p-4 rounded space-y-4",
            div {
                label { class: LABEL, "Height (cm)" }
                input {
                    r#type: "number",
                    class: FIELD,
                    placeholder: "180",
                    value: "{height}",
                    oninput: move |e| on_height_change.call(e.value()),
                }
            }

            div {
                label { class: LABEL, "Weight (kg)" }
                input {
                    r#type: "number",
                    class: FIELD,
                    placeholder: "80",
                    value: "{weight}",
                    oninput: move |e| on_weight_change.call(e.value()),
                }
            }

            div {
                label { class: LABEL, "Build" }
                select {
                    class: FIELD,
                    onchange: move |e| on_build_change.call(e.value()),
                    for build in Build::ALL {
                        option {
                            value: build.label(),
                            selected: build == selected_build,
                            "{build}"
                        }
                    }
                }
            }

            div {
                label { class: LABEL, "Product Type" }
                select {
                    class: FIELD,
                    "data-testid": "product-type",
                    onchange: move |e| on_product_change.call(e.value()),
                    for product in ProductType::ALL {
                        option {
                            value: product.label(),
                            selected: product == product_type,
                            "{product}"
                        }
                    }
                }
            }

            div {
                label { class: LABEL, "{text_label}" }
                textarea {
                    rows: "3",
                    maxlength: "{text_max_chars}",
                    class: "{FIELD} resize-none",
                    placeholder: "Type your custom message here...",
                    value: "{custom_text}",
                    oninput: move |e| on_text_input.call(e.value()),
                }
            }

            p { class: "text-xs text-gray-500 mt-2", "{selected_label}" }
            p { class: "text-xs text-gray-400", "{layout_label}" }
        }
    }
}
