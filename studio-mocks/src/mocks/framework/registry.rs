//! Control registry for typed control management with URL sync

use super::panel::MockPage;
use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// How a control is edited in the panel
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Bool,
    /// (value, label) pairs rendered as a button group
    Enum(Vec<(&'static str, &'static str)>),
    /// Free-form text, optionally multi-line
    Text { multiline: bool },
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
}

impl ControlDef {
    /// Starting value for this control given the pairs decoded from the URL.
    /// Missing keys fall back to the default; enum values outside the option
    /// list are treated as missing.
    pub fn initial_value(&self, state_pairs: &[(String, String)]) -> ControlValue {
        let raw = state_pairs
            .iter()
            .find(|(k, _)| k == self.key)
            .map(|(_, v)| v.as_str());

        match (&self.kind, raw) {
            (ControlKind::Bool, Some(v)) => ControlValue::Bool(v == "1" || v == "true"),
            (ControlKind::Enum(options), Some(v)) if options.iter().any(|(o, _)| *o == v) => {
                ControlValue::String(v.to_string())
            }
            (ControlKind::Text { .. }, Some(v)) => ControlValue::String(v.to_string()),
            _ => self.default.clone(),
        }
    }
}

/// Builder for creating a ControlRegistry
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            presets: Vec::new(),
        }
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            kind: ControlKind::Bool,
            default: ControlValue::Bool(default),
            doc: None,
        });
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            kind: ControlKind::Enum(options),
            default: ControlValue::String(default.to_string()),
            doc: None,
        });
        self
    }

    /// Add a free-form string control
    pub fn text_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &str,
        multiline: bool,
    ) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            kind: ControlKind::Text { multiline },
            default: ControlValue::String(default.to_string()),
            doc: None,
        });
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Add state presets
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();

        for def in &self.controls {
            let initial = def.initial_value(&state_pairs);
            // Use use_signal to properly hook into Dioxus reactive system
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::Bool(b) => *b,
                _ => false,
            })
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                _ => String::new(),
            })
            .unwrap_or_default()
    }

    /// Set a boolean value
    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    /// Set a string value (for enums and text)
    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Apply a preset - every control takes the preset's value or its default
    pub fn apply_preset(&self, preset: &Preset) {
        for (key, value) in preset.resolve(&self.controls) {
            if let Some(mut signal) = self.values.get(key).copied() {
                signal.set(value);
            }
        }
    }

    /// Whether the current values are exactly what `preset` would set
    pub fn matches_preset(&self, preset: &Preset) -> bool {
        preset
            .resolve(&self.controls)
            .into_iter()
            .all(|(key, expected)| {
                self.values
                    .get(key)
                    .is_some_and(|signal| *signal.read() == expected)
            })
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                match (&*signal.read(), &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (ControlValue::String(v), ControlValue::String(default)) => {
                        builder.set_string(def.key, v, default);
                    }
                    _ => {}
                }
            }
        }

        builder.build_option()
    }

    /// Mirror control changes into `page`'s URL. Skips the first run so
    /// opening a mock doesn't rewrite the URL it was opened with.
    pub fn use_url_sync(&self, page: MockPage) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(page.to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_def() -> ControlDef {
        ControlDef {
            key: "layout",
            label: "Layout",
            kind: ControlKind::Enum(vec![("wide", "Wide"), ("compact", "Compact")]),
            default: ControlValue::String("wide".into()),
            doc: None,
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_initial_value_defaults_when_missing() {
        assert_eq!(
            layout_def().initial_value(&[]),
            ControlValue::String("wide".into())
        );
    }

    #[test]
    fn test_initial_value_from_url() {
        assert_eq!(
            layout_def().initial_value(&pairs(&[("layout", "compact")])),
            ControlValue::String("compact".into())
        );
    }

    #[test]
    fn test_initial_value_rejects_unknown_enum_option() {
        assert_eq!(
            layout_def().initial_value(&pairs(&[("layout", "gigantic")])),
            ControlValue::String("wide".into())
        );
    }

    #[test]
    fn test_initial_bool_and_text() {
        let has_image = ControlDef {
            key: "has_image",
            label: "Has Image",
            kind: ControlKind::Bool,
            default: ControlValue::Bool(false),
            doc: None,
        };
        let text = ControlDef {
            key: "text",
            label: "Text",
            kind: ControlKind::Text { multiline: true },
            default: ControlValue::String(String::new()),
            doc: None,
        };
        let state = pairs(&[("has_image", "1"), ("text", "Hi\nthere")]);
        assert_eq!(has_image.initial_value(&state), ControlValue::Bool(true));
        assert_eq!(
            text.initial_value(&state),
            ControlValue::String("Hi\nthere".into())
        );
        assert_eq!(
            has_image.initial_value(&pairs(&[("has_image", "0")])),
            ControlValue::Bool(false)
        );
    }
}
