//! URL state persistence for mock pages
//!
//! Serializes control state as base64-encoded JSON in the query string,
//! keeping URLs opaque and avoiding conflicts with query parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a state string from a URL query parameter into key-value pairs.
/// Anything malformed decodes to no pairs, i.e. all defaults.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(b) => b,
        Err(_) => return Vec::new(),
    };

    let map: BTreeMap<String, String> = match serde_json::from_slice(&json_bytes) {
        Ok(m) => m,
        Err(_) => return Vec::new(),
    };

    map.into_iter().collect()
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).expect("state map is always serializable");
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default values and produces an encoded state string
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn build(self) -> String {
        build_state(&self.pairs)
    }

    /// `None` when every value is at its default, so the URL stays clean
    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.build())
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_encoding() {
        let pairs = vec![
            ("product".to_string(), "Hoodie".to_string()),
            ("text".to_string(), "Line one\nLine two".to_string()),
        ];
        let encoded = build_state(&pairs);
        assert!(!encoded.contains('='));
        assert_eq!(parse_state(&encoded), pairs);
    }

    #[test]
    fn test_malformed_state_is_empty() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("!!not base64!!").is_empty());
        // valid base64, not JSON
        assert!(parse_state(&URL_SAFE_NO_PAD.encode(b"hello")).is_empty());
    }

    #[test]
    fn test_builder_skips_defaults() {
        let mut builder = StateBuilder::new();
        builder.set_bool("has_image", false, false);
        builder.set_string("layout", "wide", "wide");
        assert_eq!(builder.build_option(), None);
    }

    #[test]
    fn test_builder_keeps_changes() {
        let mut builder = StateBuilder::new();
        builder.set_bool("has_image", true, false);
        builder.set_string("layout", "compact", "wide");
        let encoded = builder.build_option().unwrap();
        assert_eq!(
            parse_state(&encoded),
            vec![
                ("has_image".to_string(), "1".to_string()),
                ("layout".to_string(), "compact".to_string()),
            ]
        );
    }
}
