//! State presets for quick configuration switching

use super::registry::{ControlDef, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    /// Create a new preset with the given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    /// Set a boolean value in this preset
    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    /// Set a string/enum value in this preset
    pub fn set_string(mut self, key: &'static str, value: &str) -> Self {
        self.values
            .insert(key, ControlValue::String(value.to_string()));
        self
    }

    /// Full value set for `controls`: the preset's value where it has one,
    /// the control's default otherwise.
    pub fn resolve(&self, controls: &[ControlDef]) -> Vec<(&'static str, ControlValue)> {
        controls
            .iter()
            .map(|control| {
                let value = self
                    .values
                    .get(control.key)
                    .cloned()
                    .unwrap_or_else(|| control.default.clone());
                (control.key, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::registry::ControlKind;

    fn controls() -> Vec<ControlDef> {
        vec![
            ControlDef {
                key: "has_image",
                label: "Has Image",
                kind: ControlKind::Bool,
                default: ControlValue::Bool(false),
                doc: None,
            },
            ControlDef {
                key: "product",
                label: "Product",
                kind: ControlKind::Enum(vec![("T-shirt", "T-shirt"), ("Cap", "Cap")]),
                default: ControlValue::String("T-shirt".into()),
                doc: None,
            },
        ]
    }

    #[test]
    fn test_empty_preset_resolves_to_defaults() {
        let resolved = Preset::new("Default").resolve(&controls());
        assert_eq!(
            resolved,
            vec![
                ("has_image", ControlValue::Bool(false)),
                ("product", ControlValue::String("T-shirt".into())),
            ]
        );
    }

    #[test]
    fn test_preset_overrides_only_its_keys() {
        let preset = Preset::new("Cap").set_string("product", "Cap");
        let resolved = preset.resolve(&controls());
        assert_eq!(resolved[0], ("has_image", ControlValue::Bool(false)));
        assert_eq!(resolved[1], ("product", ControlValue::String("Cap".into())));
    }

    #[test]
    fn test_unknown_preset_key_ignored() {
        let preset = Preset::new("Odd").set_bool("missing", true);
        assert_eq!(preset.resolve(&controls()).len(), 2);
    }
}
