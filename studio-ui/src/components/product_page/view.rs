use dioxus::html::FileData;
use dioxus::prelude::*;
use studio_core::ProductPageModel;

use super::options_form::OptionsForm;
use super::preview_panel::PreviewPanel;

/// Pure product page view. Renders a `ProductPageModel` and reports user
/// input through callbacks; it holds no state of its own.
#[component]
pub fn ProductPageView(
    model: ProductPageModel,
    /// File picker changed. `None` when the picker was dismissed.
    on_file_selected: EventHandler<Option<FileData>>,
    /// Something was dropped on the drop zone
    on_file_dropped: EventHandler<Option<FileData>>,
    on_text_input: EventHandler<String>,
    on_product_change: EventHandler<String>,
    on_height_change: EventHandler<String>,
    on_weight_change: EventHandler<String>,
    on_build_change: EventHandler<String>,
) -> Element {
    let layout = model.layout_mode.label();

    rsx! {
        div { class: "w-full min-h-screen flex items-center justify-center",
            div {
                class: model.container_class.clone(),
                "data-layout": layout,
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    PreviewPanel {
                        preview: model.preview.clone(),
                        thumbnail_url: model.thumbnail_url.clone(),
                        text_echo: model.text_echo.clone(),
                        on_file_selected,
                        on_file_dropped,
                    }
                    OptionsForm {
                        product_type: model.product_type,
                        measurements: model.measurements.clone(),
                        custom_text: model.custom_text.clone(),
                        text_max_chars: model.text_max_chars,
                        text_label: model.text_label.clone(),
                        selected_label: model.selected_label.clone(),
                        layout_label: model.layout_label.clone(),
                        on_text_input,
                        on_product_change,
                        on_height_change,
                        on_weight_change,
                        on_build_change,
                    }
                }
            }
        }
    }
}
