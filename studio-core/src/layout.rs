use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Preview container preset, cycled by the layout shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    Wide,
    Medium,
    Compact,
}

#[allow(clippy::derivable_impls)]
impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::Wide
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown layout mode: {0}")]
pub struct ParseLayoutModeError(pub String);

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Wide, LayoutMode::Medium, LayoutMode::Compact];

    /// Zero-based position in the cycle
    pub fn index(self) -> usize {
        match self {
            LayoutMode::Wide => 0,
            LayoutMode::Medium => 1,
            LayoutMode::Compact => 2,
        }
    }

    /// Mode at `index` modulo the cycle length
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Wide => "Wide",
            LayoutMode::Medium => "Medium",
            LayoutMode::Compact => "Compact",
        }
    }

    /// Classes applied to the outer preview container
    pub fn container_class(self) -> &'static str {
        match self {
            LayoutMode::Wide => "max-w-6xl ml-0",
            LayoutMode::Medium => "max-w-4xl bg-blue-100",
            LayoutMode::Compact => "max-w-3xl bg-green-100 rounded-xl shadow-lg",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    /// Accepts the label in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLayoutModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(LayoutMode::Wide.next(), LayoutMode::Medium);
        assert_eq!(LayoutMode::Medium.next(), LayoutMode::Compact);
        assert_eq!(LayoutMode::Compact.next(), LayoutMode::Wide);
    }

    #[test]
    fn test_n_advances_equal_n_mod_3() {
        let mut mode = LayoutMode::default();
        for n in 1..=30 {
            mode = mode.next();
            assert_eq!(mode.index(), n % 3);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(LayoutMode::from_index(3), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_index(4), LayoutMode::Medium);
        assert_eq!(LayoutMode::from_index(8), LayoutMode::Compact);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("compact".parse::<LayoutMode>(), Ok(LayoutMode::Compact));
        assert_eq!("WIDE".parse::<LayoutMode>(), Ok(LayoutMode::Wide));
        assert!("tiny".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_container_classes_are_distinct() {
        let classes: Vec<_> = LayoutMode::ALL.iter().map(|m| m.container_class()).collect();
        assert_eq!(classes[0], "max-w-6xl ml-0");
        assert!(classes[1].contains("bg-blue-100"));
        assert!(classes[2].contains("shadow-lg"));
    }
}
