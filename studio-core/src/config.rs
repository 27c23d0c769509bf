//! Product page configuration

use crate::shortcut::{Modifier, Shortcut};

/// Tunables for the product page. `Default` carries the shipped values.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// `maxlength` on the print text area. Display-only, the model never truncates.
    pub text_max_chars: usize,
    /// Lines of print text echoed under the preview
    pub text_max_lines: usize,
    /// Shortcut that cycles the layout preset
    pub layout_shortcut: Shortcut,
    /// Shown in the preview while no image is selected
    pub preview_placeholder: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            text_max_chars: 150,
            text_max_lines: 3,
            layout_shortcut: Shortcut::new(Modifier::Alt, 'q'),
            preview_placeholder: "[3D T-Shirt Preview]".to_string(),
        }
    }
}
