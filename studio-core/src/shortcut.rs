//! Keyboard shortcut matching
//!
//! Browser key events are reduced to a `KeyChord` at the edge so matching
//! stays platform-neutral and testable.

/// Modifier that must be held for a shortcut to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Alt,
    Ctrl,
    Meta,
}

/// A key press with its modifier state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// `KeyboardEvent.key` as reported by the browser
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    fn has(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Alt => self.alt,
            Modifier::Ctrl => self.ctrl,
            Modifier::Meta => self.meta,
        }
    }
}

/// Modifier + character shortcut. The key compares case-insensitively, so
/// Shift or Caps Lock don't stop it from firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub modifier: Modifier,
    pub key: char,
}

impl Shortcut {
    pub const fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }

    pub fn matches(&self, chord: &KeyChord) -> bool {
        if !chord.has(self.modifier) {
            return false;
        }
        let mut chars = chord.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().eq(self.key.to_lowercase()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALT_Q: Shortcut = Shortcut::new(Modifier::Alt, 'q');

    #[test]
    fn test_alt_q_matches() {
        assert!(ALT_Q.matches(&KeyChord::new("q").alt()));
    }

    #[test]
    fn test_uppercase_key_matches() {
        assert!(ALT_Q.matches(&KeyChord::new("Q").alt().shift()));
    }

    #[test]
    fn test_missing_modifier_does_not_match() {
        assert!(!ALT_Q.matches(&KeyChord::new("q")));
        assert!(!ALT_Q.matches(&KeyChord::new("q").ctrl()));
    }

    #[test]
    fn test_other_key_does_not_match() {
        assert!(!ALT_Q.matches(&KeyChord::new("w").alt()));
        assert!(!ALT_Q.matches(&KeyChord::new("Alt").alt()));
        assert!(!ALT_Q.matches(&KeyChord::new("").alt()));
    }

    #[test]
    fn test_extra_modifiers_still_match() {
        assert!(ALT_Q.matches(&KeyChord::new("q").alt().ctrl()));
    }

    #[test]
    fn test_ctrl_shortcut() {
        let ctrl_l = Shortcut::new(Modifier::Ctrl, 'l');
        assert!(ctrl_l.matches(&KeyChord::new("l").ctrl()));
        assert!(!ctrl_l.matches(&KeyChord::new("l").meta()));
    }
}
