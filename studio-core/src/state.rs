//! Product page state and the actions that mutate it

use tracing::{debug, warn};

use crate::layout::LayoutMode;
use crate::product::{Build, Measurements, ProductType};

/// Displayable handle to a user-selected image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Object URL (or any `src`-able URL)
    pub url: String,
    /// Name of the file the URL was created from
    pub file_name: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.into(),
        }
    }
}

/// Everything the user has entered on the product page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationState {
    pub image: Option<ImageRef>,
    /// Stored verbatim, the length limit lives on the text area
    pub custom_text: String,
    pub product_type: ProductType,
    pub layout_mode: LayoutMode,
    pub measurements: Measurements,
}

/// A state mutation produced by an input adapter.
///
/// Form values arrive as the raw strings the DOM reports and are parsed
/// here, so unknown values are rejected in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// File picker change. `None` when the picker was dismissed.
    ImageSelected(Option<ImageRef>),
    /// Drop onto the drop zone. `None` when the drop carried no file.
    ImageDropped(Option<ImageRef>),
    TextInput(String),
    ProductTypeChanged(String),
    HeightChanged(String),
    WeightChanged(String),
    BuildChanged(String),
    /// The layout shortcut fired
    CycleLayout,
}

impl PresentationState {
    /// The state after `action`, or `None` when it changes nothing
    pub fn reduced(&self, action: Action) -> Option<Self> {
        let mut next = self.clone();
        next.apply(action).then_some(next)
    }

    /// Apply `action`, returning whether anything changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::ImageSelected(image) | Action::ImageDropped(image) => {
                let Some(image) = image else {
                    return false;
                };
                if self.image.as_ref() == Some(&image) {
                    return false;
                }
                debug!("Preview image replaced with {}", image.file_name);
                self.image = Some(image);
                true
            }
            Action::TextInput(value) => {
                if self.custom_text == value {
                    return false;
                }
                self.custom_text = value;
                true
            }
            Action::ProductTypeChanged(raw) => match raw.parse::<ProductType>() {
                Ok(product_type) => {
                    let changed = self.product_type != product_type;
                    self.product_type = product_type;
                    changed
                }
                Err(e) => {
                    warn!("Ignoring product selection: {}", e);
                    false
                }
            },
            Action::HeightChanged(raw) => {
                if self.measurements.height == raw {
                    return false;
                }
                self.measurements.height = raw;
                true
            }
            Action::WeightChanged(raw) => {
                if self.measurements.weight == raw {
                    return false;
                }
                self.measurements.weight = raw;
                true
            }
            Action::BuildChanged(raw) => match raw.parse::<Build>() {
                Ok(build) => {
                    let changed = self.measurements.build != build;
                    self.measurements.build = build;
                    changed
                }
                Err(e) => {
                    warn!("Ignoring build selection: {}", e);
                    false
                }
            },
            Action::CycleLayout => {
                self.layout_mode = self.layout_mode.next();
                debug!(
                    "Layout shortcut pressed, layout mode: {}",
                    self.layout_mode.index()
                );
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> ImageRef {
        ImageRef::new("blob:http://localhost/1234", "shirt.png")
    }

    #[test]
    fn test_defaults() {
        let state = PresentationState::default();
        assert_eq!(state.image, None);
        assert_eq!(state.custom_text, "");
        assert_eq!(state.product_type, ProductType::TShirt);
        assert_eq!(state.layout_mode, LayoutMode::Wide);
    }

    #[test]
    fn test_four_shortcuts_land_on_medium() {
        let mut state = PresentationState::default();
        for _ in 0..4 {
            assert!(state.apply(Action::CycleLayout));
        }
        assert_eq!(state.layout_mode.index(), 1);
    }

    #[test]
    fn test_select_image_sets_handle() {
        let mut state = PresentationState::default();
        assert!(state.apply(Action::ImageSelected(Some(shirt()))));
        let image = state.image.as_ref().unwrap();
        assert!(!image.url.is_empty());
        assert_eq!(image.file_name, "shirt.png");
    }

    #[test]
    fn test_select_no_file_leaves_image_unchanged() {
        let mut state = PresentationState::default();
        state.apply(Action::ImageSelected(Some(shirt())));
        assert!(!state.apply(Action::ImageSelected(None)));
        assert_eq!(state.image, Some(shirt()));

        let mut empty = PresentationState::default();
        assert!(!empty.apply(Action::ImageDropped(None)));
        assert_eq!(empty.image, None);
    }

    #[test]
    fn test_drop_matches_select() {
        let mut selected = PresentationState::default();
        let mut dropped = PresentationState::default();
        selected.apply(Action::ImageSelected(Some(shirt())));
        dropped.apply(Action::ImageDropped(Some(shirt())));
        assert_eq!(selected, dropped);
    }

    #[test]
    fn test_new_image_replaces_old() {
        let mut state = PresentationState::default();
        state.apply(Action::ImageSelected(Some(shirt())));
        let hoodie = ImageRef::new("blob:http://localhost/5678", "hoodie.jpg");
        assert!(state.apply(Action::ImageDropped(Some(hoodie.clone()))));
        assert_eq!(state.image, Some(hoodie));
    }

    #[test]
    fn test_text_input_is_verbatim() {
        let mut state = PresentationState::default();
        let long = "x".repeat(400);
        state.apply(Action::TextInput(long.clone()));
        assert_eq!(state.custom_text, long);

        state.apply(Action::TextInput("  line one\nline two  ".into()));
        assert_eq!(state.custom_text, "  line one\nline two  ");
    }

    #[test]
    fn test_product_type_change() {
        let mut state = PresentationState::default();
        assert!(state.apply(Action::ProductTypeChanged("Hoodie".into())));
        assert_eq!(state.product_type, ProductType::Hoodie);
        assert!(!state.apply(Action::ProductTypeChanged("Hoodie".into())));
    }

    #[test]
    fn test_unknown_product_type_rejected() {
        let mut state = PresentationState::default();
        state.apply(Action::ProductTypeChanged("Cap".into()));
        assert!(!state.apply(Action::ProductTypeChanged("Scarf".into())));
        assert_eq!(state.product_type, ProductType::Cap);
    }

    #[test]
    fn test_measurements() {
        let mut state = PresentationState::default();
        assert!(state.apply(Action::HeightChanged("180".into())));
        assert!(state.apply(Action::WeightChanged("80".into())));
        assert!(state.apply(Action::BuildChanged("Lean".into())));
        assert_eq!(
            state.measurements,
            Measurements {
                height: "180".into(),
                weight: "80".into(),
                build: Build::Lean,
            }
        );

        assert!(state.apply(Action::HeightChanged("".into())));
        assert_eq!(state.measurements.height_cm(), None);
        assert!(!state.apply(Action::BuildChanged("Giant".into())));
        assert_eq!(state.measurements.build, Build::Lean);
    }

    #[test]
    fn test_decimal_weight_is_kept() {
        let mut state = PresentationState::default();
        state.apply(Action::WeightChanged("72".into()));
        assert!(state.apply(Action::WeightChanged("72.5".into())));
        assert_eq!(state.measurements.weight, "72.5");
        assert_eq!(state.measurements.weight_kg(), Some(72.5));
        assert!(!state.apply(Action::WeightChanged("72.5".into())));
    }

    #[test]
    fn test_reduced() {
        let state = PresentationState::default();
        let next = state.reduced(Action::TextInput("Hi".into())).unwrap();
        assert_eq!(next.custom_text, "Hi");
        assert_eq!(state.custom_text, "");
        assert_eq!(next.reduced(Action::TextInput("Hi".into())), None);
        assert_eq!(state.reduced(Action::ImageDropped(None)), None);
    }
}
