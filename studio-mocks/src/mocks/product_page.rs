//! ProductPage mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use crate::demo_data::{sample_image, LONG_TEXT};
use dioxus::html::FileData;
use dioxus::prelude::*;
use studio_core::{
    Build, LayoutMode, Measurements, PresentationState, ProductPageModel, ProductType,
    StudioConfig,
};
use studio_ui::shortcuts::use_shortcut;
use studio_ui::ProductPageView;
use tracing::warn;

#[component]
pub fn ProductPageMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "product",
            "Product",
            ProductType::default().label(),
            ProductType::ALL.iter().map(|p| (p.label(), p.label())).collect(),
        )
        .enum_control(
            "layout",
            "Layout",
            "wide",
            vec![("wide", "Wide"), ("medium", "Medium"), ("compact", "Compact")],
        )
        .doc("Alt+Q cycles this too")
        .bool_control("has_image", "Has Image", false)
        .doc("Any file picked or dropped in the mock shows the sample image")
        .text_control("text", "Print Text", "", true)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("With Image").set_bool("has_image", true),
            Preset::new("Compact Hoodie")
                .set_string("layout", "compact")
                .set_string("product", ProductType::Hoodie.label()),
            Preset::new("Long Text")
                .set_bool("has_image", true)
                .set_string("text", LONG_TEXT),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::ProductPage);

    let config = StudioConfig::default();
    let mut measurements = use_signal(Measurements::default);

    let layout_mode = registry
        .get_string("layout")
        .parse::<LayoutMode>()
        .unwrap_or_default();

    {
        let registry = registry.clone();
        use_shortcut(
            config.layout_shortcut,
            use_callback(move |()| {
                let current = registry
                    .get_string("layout")
                    .parse::<LayoutMode>()
                    .unwrap_or_default();
                registry.set_string("layout", current.next().label().to_lowercase());
            }),
        );
    }

    let state = PresentationState {
        image: registry.get_bool("has_image").then(sample_image),
        custom_text: registry.get_string("text"),
        product_type: registry
            .get_string("product")
            .parse()
            .unwrap_or_default(),
        layout_mode,
        measurements: measurements(),
    };
    let model = ProductPageModel::build(&state, &config);

    let on_file = {
        let registry = registry.clone();
        move |file: Option<FileData>| {
            if file.is_some() {
                registry.set_bool("has_image", true);
            }
        }
    };

    rsx! {
        MockPanel { current_mock: MockPage::ProductPage, registry: registry.clone(),
            ProductPageView {
                model,
                on_file_selected: on_file.clone(),
                on_file_dropped: on_file,
                on_text_input: {
                    let registry = registry.clone();
                    move |value: String| registry.set_string("text", value)
                },
                on_product_change: {
                    let registry = registry.clone();
                    move |value: String| match value.parse::<ProductType>() {
                        Ok(product) => registry.set_string("product", product.label().to_string()),
                        Err(e) => warn!("{}", e),
                    }
                },
                on_height_change: move |value: String| {
                    measurements.write().height = value;
                },
                on_weight_change: move |value: String| {
                    measurements.write().weight = value;
                },
                on_build_change: move |value: String| match value.parse::<Build>() {
                    Ok(build) => measurements.write().build = build,
                    Err(e) => warn!("{}", e),
                },
            }
        }
    }
}
