//! Preview box, upload controls and drop zone

use dioxus::html::FileData;
use dioxus::prelude::*;
use studio_core::PreviewContent;

/// Left half of the product page
#[component]
pub fn PreviewPanel(
    preview: PreviewContent,
    thumbnail_url: Option<String>,
    text_echo: Option<String>,
    on_file_selected: EventHandler<Option<FileData>>,
    on_file_dropped: EventHandler<Option<FileData>>,
) -> Element {
    rsx! {
        div { class: "bg-gray-100 p-4 rounded flex flex-col items-center justify-center h-96",
            div { class: "w-64 h-64 bg-white border border-dashed border-gray-400 flex items-center justify-center",
                match preview {
                    PreviewContent::Image { url, alt } => rsx! {
                        img {
                            src: "{url}",
                            alt: "{alt}",
                            class: "w-24 h-24 object-contain",
                            "data-testid": "preview-image",
                        }
                    },
                    PreviewContent::Placeholder(label) => rsx! {
                        span { class: "text-gray-500", "data-testid": "preview-placeholder", "{label}" }
                    },
                }
            }

            div { class: "mt-4",
                input {
                    r#type: "file",
                    onchange: move |evt: FormEvent| {
                        on_file_selected.call(evt.files().into_iter().next());
                    },
                }
                if let Some(url) = thumbnail_url {
                    img {
                        src: "{url}",
                        class: "mt-2 w-32 h-32 object-contain border",
                    }
                }
                DropZone { on_file_dropped }
            }

            p { class: "text-sm text-gray-400 mt-2", "Image will appear inside the 3D shirt" }

            if let Some(text) = text_echo {
                div {
                    class: "mt-2 text-center text-xs text-black whitespace-pre-line",
                    "data-testid": "text-echo",
                    "{text}"
                }
            }
        }
    }
}

/// Drag target. Both handlers suppress the browser default, otherwise the
/// drop would navigate to the file.
#[component]
fn DropZone(on_file_dropped: EventHandler<Option<FileData>>) -> Element {
    let mut is_dragging = use_signal(|| false);

    let border = if is_dragging() {
        "border-blue-400 bg-blue-50"
    } else {
        "border-gray-300"
    };

    rsx! {
        div {
            class: "w-32 h-32 mt-2 border-2 border-dashed flex items-center justify-center text-xs text-gray-500 {border}",
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                is_dragging.set(true);
            },
            ondragleave: move |_| is_dragging.set(false),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                is_dragging.set(false);
                on_file_dropped.call(evt.files().into_iter().next());
            },
            "Drag & drop image here"
        }
    }
}
