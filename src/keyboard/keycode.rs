//! Platform-neutral key identifiers.
//!
//! Backends map their native key codes onto these variants; the names are the
//! ones accepted in key binding strings (`esc`, `backspace`, `C-u`, ...).

/// Macro to define keycodes with all their properties in one place.
/// Format: (Variant, name, optional_char)
macro_rules! define_keycodes {
    (
        $(
            $variant:ident = ($name:expr $(, char: $char:expr)?)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KeyCode {
            $($variant),*
        }

        impl KeyCode {
            /// Every known key, in declaration order
            pub const ALL: &'static [KeyCode] = &[$(Self::$variant),*];

            /// Convert keycode to its binding name
            pub fn to_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Parse a key name string to KeyCode
            pub fn from_name(name: &str) -> Option<Self> {
                match name.to_lowercase().as_str() {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Printable character produced by the key without modifiers
            pub fn to_char(self) -> Option<char> {
                match self {
                    $($(Self::$variant => Some($char),)?)*
                    _ => None,
                }
            }
        }
    };
}

define_keycodes! {
    // Letters
    A = ("a", char: 'a'),
    B = ("b", char: 'b'),
    C = ("c", char: 'c'),
    D = ("d", char: 'd'),
    E = ("e", char: 'e'),
    F = ("f", char: 'f'),
    G = ("g", char: 'g'),
    H = ("h", char: 'h'),
    I = ("i", char: 'i'),
    J = ("j", char: 'j'),
    K = ("k", char: 'k'),
    L = ("l", char: 'l'),
    M = ("m", char: 'm'),
    N = ("n", char: 'n'),
    O = ("o", char: 'o'),
    P = ("p", char: 'p'),
    Q = ("q", char: 'q'),
    R = ("r", char: 'r'),
    S = ("s", char: 's'),
    T = ("t", char: 't'),
    U = ("u", char: 'u'),
    V = ("v", char: 'v'),
    W = ("w", char: 'w'),
    X = ("x", char: 'x'),
    Y = ("y", char: 'y'),
    Z = ("z", char: 'z'),

    // Numbers
    Num0 = ("0", char: '0'),
    Num1 = ("1", char: '1'),
    Num2 = ("2", char: '2'),
    Num3 = ("3", char: '3'),
    Num4 = ("4", char: '4'),
    Num5 = ("5", char: '5'),
    Num6 = ("6", char: '6'),
    Num7 = ("7", char: '7'),
    Num8 = ("8", char: '8'),
    Num9 = ("9", char: '9'),

    // Special keys
    Escape = ("esc"),
    Backspace = ("backspace"),
    Return = ("enter"),
    Tab = ("tab"),
    Space = ("space"),
    Delete = ("delete"),

    // Arrow keys
    Left = ("leftarrow"),
    Right = ("rightarrow"),
    Down = ("downarrow"),
    Up = ("uparrow"),

    // Navigation
    Home = ("home"),
    End = ("end"),
    PageUp = ("pageup"),
    PageDown = ("pagedown"),

    // Punctuation
    Equal = ("=", char: '='),
    Minus = ("-", char: '-'),
    LeftBracket = ("[", char: '['),
    RightBracket = ("]", char: ']'),
    Quote = ("'", char: '\''),
    Semicolon = (";", char: ';'),
    Backslash = ("\\", char: '\\'),
    Comma = (",", char: ','),
    Slash = ("/", char: '/'),
    Period = (".", char: '.'),
    Grave = ("`", char: '`'),
}

impl KeyCode {
    /// Find the key that types `c` (ignoring case for letters)
    pub fn from_char(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|k| k.to_char() == Some(lower))
    }
}

/// Modifier state attached to a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.meta
    }
}

/// A single key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers, pressed: true }
    }

    pub fn release(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers, pressed: false }
    }

    /// Canonical event name, e.g. `a`, `A`, `esc`, `C-u`, `A-S-tab`.
    ///
    /// Shift on a printable key is folded into the character itself.
    pub fn name(&self) -> String {
        let mut name = String::new();
        if self.modifiers.alt {
            name.push_str("A-");
        }
        if self.modifiers.control {
            name.push_str("C-");
        }
        if self.modifiers.meta {
            name.push_str("M-");
        }

        match self.code.to_char() {
            Some(c) if self.modifiers.shift => name.push(c.to_ascii_uppercase()),
            Some(c) => name.push(c),
            None => {
                if self.modifiers.shift {
                    name.push_str("S-");
                }
                name.push_str(self.code.to_name());
            }
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for key in KeyCode::ALL {
            assert_eq!(KeyCode::from_name(key.to_name()), Some(*key));
        }
    }

    #[test]
    fn test_from_char() {
        assert_eq!(KeyCode::from_char('a'), Some(KeyCode::A));
        assert_eq!(KeyCode::from_char('Q'), Some(KeyCode::Q));
        assert_eq!(KeyCode::from_char(';'), Some(KeyCode::Semicolon));
        assert_eq!(KeyCode::from_char('é'), None);
    }

    #[test]
    fn test_event_name() {
        let plain = InputEvent::press(KeyCode::A, Modifiers::none());
        assert_eq!(plain.name(), "a");

        let shifted = InputEvent::press(KeyCode::A, Modifiers { shift: true, ..Modifiers::none() });
        assert_eq!(shifted.name(), "A");

        let ctrl = InputEvent::press(KeyCode::U, Modifiers { control: true, ..Modifiers::none() });
        assert_eq!(ctrl.name(), "C-u");

        let esc = InputEvent::press(KeyCode::Escape, Modifiers::none());
        assert_eq!(esc.name(), "esc");

        let shift_tab = InputEvent::press(
            KeyCode::Tab,
            Modifiers { shift: true, alt: true, ..Modifiers::none() },
        );
        assert_eq!(shift_tab.name(), "A-S-tab");
    }
}
