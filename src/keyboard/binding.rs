//! Key binding strings from the settings file
//!
//! A binding value is a space-separated list of alternatives, each one a key
//! name with optional modifier prefixes: `A-` (alt), `C-` (control),
//! `M-` (meta) and `S-` (shift). Examples: `esc`, `C-u`, `backspace C-h`.

use std::fmt;

use super::keycode::{InputEvent, KeyCode, Modifiers};
use crate::error::HintError;

/// One key combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    /// Parse a single `[A-][C-][M-][S-]key` combination
    pub fn parse(spec: &str) -> Option<Self> {
        let mut modifiers = Modifiers::none();
        let mut rest = spec;

        // A bare "-" is the minus key, not a dangling prefix
        while rest.len() > 2 && rest.as_bytes()[1] == b'-' {
            match rest.as_bytes()[0] {
                b'A' => modifiers.alt = true,
                b'C' => modifiers.control = true,
                b'M' => modifiers.meta = true,
                b'S' => modifiers.shift = true,
                _ => break,
            }
            rest = &rest[2..];
        }

        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_uppercase() {
                modifiers.shift = true;
            }
            return KeyCode::from_char(c).map(|code| Self { code, modifiers });
        }

        KeyCode::from_name(rest).map(|code| Self { code, modifiers })
    }

    pub fn matches(&self, event: &InputEvent) -> bool {
        self.code == event.code && self.modifiers == event.modifiers
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", InputEvent::press(self.code, self.modifiers).name())
    }
}

/// All alternatives bound to one action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindings(Vec<KeyBinding>);

impl KeyBindings {
    /// Parse a space-separated list of bindings
    pub fn parse(value: &str) -> Result<Self, HintError> {
        value
            .split_whitespace()
            .map(|spec| {
                KeyBinding::parse(spec)
                    .ok_or_else(|| HintError::Config(format!("unknown key binding '{}'", spec)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn matches(&self, event: &InputEvent) -> bool {
        self.0.iter().any(|b| b.matches(event))
    }

    pub fn as_slice(&self) -> &[KeyBinding] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl() -> Modifiers {
        Modifiers { control: true, ..Modifiers::none() }
    }

    #[test]
    fn test_parse_plain_key() {
        let binding = KeyBinding::parse("esc").unwrap();
        assert_eq!(binding.code, KeyCode::Escape);
        assert!(binding.modifiers.is_empty());
    }

    #[test]
    fn test_parse_modified_key() {
        let binding = KeyBinding::parse("C-u").unwrap();
        assert_eq!(binding.code, KeyCode::U);
        assert_eq!(binding.modifiers, ctrl());

        let binding = KeyBinding::parse("A-C-backspace").unwrap();
        assert_eq!(binding.code, KeyCode::Backspace);
        assert!(binding.modifiers.alt && binding.modifiers.control);
    }

    #[test]
    fn test_parse_minus_and_uppercase() {
        assert_eq!(KeyBinding::parse("-").unwrap().code, KeyCode::Minus);

        let upper = KeyBinding::parse("G").unwrap();
        assert_eq!(upper.code, KeyCode::G);
        assert!(upper.modifiers.shift);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(KeyBinding::parse("hyper").is_none());
        assert!(KeyBindings::parse("esc nonsense").is_err());
    }

    #[test]
    fn test_bindings_match_any_alternative() {
        let bindings = KeyBindings::parse("backspace C-h").unwrap();
        assert_eq!(bindings.as_slice().len(), 2);

        assert!(bindings.matches(&InputEvent::press(KeyCode::Backspace, Modifiers::none())));
        assert!(bindings.matches(&InputEvent::press(KeyCode::H, ctrl())));
        assert!(!bindings.matches(&InputEvent::press(KeyCode::H, Modifiers::none())));
    }

    #[test]
    fn test_display_uses_event_name() {
        assert_eq!(KeyBinding::parse("C-u").unwrap().to_string(), "C-u");
    }
}
