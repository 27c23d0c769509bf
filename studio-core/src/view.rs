//! Pure view model for the product page
//!
//! `ProductPageModel::build` maps state to everything the view needs to
//! render. It has no side effects, so equal inputs always produce equal
//! models and therefore equal markup.

use crate::config::StudioConfig;
use crate::layout::LayoutMode;
use crate::product::{Measurements, ProductType};
use crate::state::PresentationState;

/// What the preview box shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    Placeholder(String),
    Image { url: String, alt: String },
}

/// Display-ready product page
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPageModel {
    pub layout_mode: LayoutMode,
    pub container_class: String,
    pub preview: PreviewContent,
    /// Thumbnail under the upload control, present once an image is chosen
    pub thumbnail_url: Option<String>,
    /// Print text echoed under the preview, `None` when empty
    pub text_echo: Option<String>,
    /// Text area value
    pub custom_text: String,
    pub text_max_chars: usize,
    /// Text area label, carries the line limit
    pub text_label: String,
    pub product_type: ProductType,
    pub measurements: Measurements,
    pub selected_label: String,
    pub layout_label: String,
}

impl ProductPageModel {
    pub fn build(state: &PresentationState, config: &StudioConfig) -> Self {
        let preview = match &state.image {
            Some(image) => PreviewContent::Image {
                url: image.url.clone(),
                alt: image.file_name.clone(),
            },
            None => PreviewContent::Placeholder(config.preview_placeholder.clone()),
        };

        Self {
            layout_mode: state.layout_mode,
            container_class: format!("w-full p-4 {}", state.layout_mode.container_class()),
            preview,
            thumbnail_url: state.image.as_ref().map(|i| i.url.clone()),
            text_echo: echo_lines(&state.custom_text, config.text_max_lines),
            custom_text: state.custom_text.clone(),
            text_max_chars: config.text_max_chars,
            text_label: format!("Text to print (max {} lines)", config.text_max_lines),
            product_type: state.product_type,
            measurements: state.measurements.clone(),
            selected_label: format!("Selected:{}", state.product_type),
            layout_label: format!("Layout Mode:{}", state.layout_mode.index() + 1),
        }
    }
}

/// First `max_lines` lines of `text`, or `None` if there is nothing to show
fn echo_lines(text: &str, max_lines: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(text.lines().take(max_lines).collect::<Vec<_>>().join("\n"))
}
