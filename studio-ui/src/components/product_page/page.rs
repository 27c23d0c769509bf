use dioxus::html::FileData;
use dioxus::prelude::*;
use studio_core::{
    Action, ImageRef, LoadSequence, PresentationState, ProductPageModel, StudioConfig,
};
use tracing::{debug, warn};

use super::view::ProductPageView;
use crate::shortcuts::use_shortcut;
use crate::wasm_utils::{mime_for_file_name, ObjectUrl};

/// Stateful product page.
///
/// Owns the `PresentationState`, turns browser input into `Action`s and
/// renders through `ProductPageView`. Reads `StudioConfig` from context,
/// falling back to the defaults.
#[component]
pub fn ProductPage() -> Element {
    let config = try_use_context::<StudioConfig>().unwrap_or_default();
    let mut state = use_signal(PresentationState::default);
    // Keeps the current preview's blob URL alive; replacing it revokes the old one
    let mut object_url: Signal<Option<ObjectUrl>> = use_signal(|| None);
    let mut loads = use_signal(LoadSequence::default);

    // Only write the signal when the reducer reports a change, so no-op
    // input doesn't re-render. A shortcut can fire after unmount, before the
    // deferred listener removal runs, so the signal may already be gone.
    let dispatch = use_callback(move |action: Action| {
        let next = match state.try_peek() {
            Ok(current) => current.reduced(action),
            Err(_) => return false,
        };
        let Some(next) = next else {
            return false;
        };
        match state.try_write() {
            Ok(mut guard) => {
                *guard = next;
                true
            }
            Err(_) => false,
        }
    });

    use_shortcut(
        config.layout_shortcut,
        use_callback(move |()| {
            dispatch.call(Action::CycleLayout);
        }),
    );

    // Reads finish in any order. Only the latest selection may land, so a
    // slow earlier file never replaces (and revokes) a newer one.
    let mut load_image = move |file: Option<FileData>, dropped: bool| {
        let Some(file) = file else {
            return;
        };
        let ticket = loads.write().issue();
        spawn(async move {
            let Some((image, url)) = read_image(file).await else {
                return;
            };
            if !loads.peek().is_current(ticket) {
                debug!("Discarding superseded image {}", image.file_name);
                return;
            }
            let action = if dropped {
                Action::ImageDropped(Some(image))
            } else {
                Action::ImageSelected(Some(image))
            };
            if dispatch.call(action) {
                object_url.set(Some(url));
            }
        });
    };

    use_drop(move || {
        if let Some(url) = object_url.write().take() {
            spawn(async move {
                drop(url);
            });
        }
    });

    let model = ProductPageModel::build(&state.read(), &config);

    rsx! {
        ProductPageView {
            model,
            on_file_selected: move |file: Option<FileData>| load_image(file, false),
            on_file_dropped: move |file: Option<FileData>| load_image(file, true),
            on_text_input: move |value: String| {
                dispatch.call(Action::TextInput(value));
            },
            on_product_change: move |value: String| {
                dispatch.call(Action::ProductTypeChanged(value));
            },
            on_height_change: move |value: String| {
                dispatch.call(Action::HeightChanged(value));
            },
            on_weight_change: move |value: String| {
                dispatch.call(Action::WeightChanged(value));
            },
            on_build_change: move |value: String| {
                dispatch.call(Action::BuildChanged(value));
            },
        }
    }
}

/// Read an uploaded file into a blob URL. Any file is accepted; one the
/// browser can't decode just doesn't display.
async fn read_image(file: FileData) -> Option<(ImageRef, ObjectUrl)> {
    let file_name = file.name();
    let bytes = match file.read_bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read {}: {:?}", file_name, e);
            return None;
        }
    };

    match ObjectUrl::from_bytes(&bytes, mime_for_file_name(&file_name)) {
        Ok(url) => Some((ImageRef::new(url.as_str(), file_name), url)),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
