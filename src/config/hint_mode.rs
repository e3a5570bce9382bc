//! Hint mode settings
//!
//! Configuration for the coarse hint grid, the refinement (sift) grid, the
//! control keys used while hints are shown, and hint appearance.

use serde::{Deserialize, Serialize};

use super::colors::{HintStyle, RgbColor};
use crate::error::HintError;
use crate::hint::labels::DEFAULT_HINT_CHARS;
use crate::keyboard::KeyBindings;

/// Default refinement grid characters
pub const DEFAULT_HINT2_CHARS: &str = "hjkl;asdfgqwertyuiopzxcvb";

/// Largest refinement grid side accepted from settings
pub const MAX_HINT2_GRID_SIZE: i32 = 64;

/// Settings for hint mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HintSettings {
    /// Characters used for grid hint labels
    pub hint_chars: String,
    /// Hint box side, per mille of the screen's longer side
    pub hint_size: i32,
    /// Characters used for refinement hint labels
    pub hint2_chars: String,
    /// Refinement box side, per mille of the screen height
    pub hint2_size: i32,
    /// Gap between refinement boxes, per mille of the screen height
    pub hint2_gap_size: i32,
    /// Refinement grid is `hint2_grid_size x hint2_grid_size`
    pub hint2_grid_size: i32,
    /// Cancels hint selection
    pub hint_exit: String,
    /// Removes the last typed character
    pub hint_undo: String,
    /// Clears everything typed so far
    pub hint_undo_all: String,
    /// Hint background color (hex)
    pub hint_bgcolor: String,
    /// Hint text color (hex)
    pub hint_fgcolor: String,
    pub hint_border_radius: u32,
    pub hint_font: String,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            hint_chars: DEFAULT_HINT_CHARS.to_string(),
            hint_size: 20,
            hint2_chars: DEFAULT_HINT2_CHARS.to_string(),
            hint2_size: 20,
            hint2_gap_size: 1,
            hint2_grid_size: 3,
            hint_exit: "esc".to_string(),
            hint_undo: "backspace".to_string(),
            hint_undo_all: "C-u".to_string(),
            hint_bgcolor: "#00ff00".to_string(),
            hint_fgcolor: "#000000".to_string(),
            hint_border_radius: 3,
            hint_font: "Arial".to_string(),
        }
    }
}

/// Parsed control key bindings used during selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintKeys {
    pub exit: KeyBindings,
    pub undo: KeyBindings,
    pub undo_all: KeyBindings,
}

impl HintSettings {
    /// Fix up values that would break hint generation
    pub fn sanitize(&mut self) {
        self.hint_size = self.hint_size.clamp(0, 1000);
        self.hint2_size = self.hint2_size.clamp(0, 1000);
        self.hint2_gap_size = self.hint2_gap_size.clamp(0, 1000);
        self.hint2_grid_size = self.hint2_grid_size.clamp(1, MAX_HINT2_GRID_SIZE);

        self.hint_chars = dedup_chars(&self.hint_chars);
        if self.hint_chars.is_empty() {
            log::warn!("hint_chars is empty, using default");
            self.hint_chars = DEFAULT_HINT_CHARS.to_string();
        }

        self.hint2_chars = dedup_chars(&self.hint2_chars);
        if self.hint2_chars.is_empty() {
            log::warn!("hint2_chars is empty, using default");
            self.hint2_chars = DEFAULT_HINT2_CHARS.to_string();
        }
    }

    /// Parse the exit/undo/undo-all bindings
    pub fn keys(&self) -> Result<HintKeys, HintError> {
        Ok(HintKeys {
            exit: KeyBindings::parse(&self.hint_exit)?,
            undo: KeyBindings::parse(&self.hint_undo)?,
            undo_all: KeyBindings::parse(&self.hint_undo_all)?,
        })
    }

    /// Resolve the hint appearance
    pub fn style(&self) -> Result<HintStyle, HintError> {
        let color = |name: &str, value: &str| {
            RgbColor::from_hex(value)
                .ok_or_else(|| HintError::Config(format!("{} is not a color: '{}'", name, value)))
        };

        Ok(HintStyle {
            background: color("hint_bgcolor", &self.hint_bgcolor)?,
            foreground: color("hint_fgcolor", &self.hint_fgcolor)?,
            border_radius: self.hint_border_radius,
            font: self.hint_font.clone(),
        })
    }

    /// Look up a string option by its settings name
    pub fn get_str(&self, name: &str) -> Option<&str> {
        let value = match name {
            "hint_chars" => &self.hint_chars,
            "hint2_chars" => &self.hint2_chars,
            "hint_exit" => &self.hint_exit,
            "hint_undo" => &self.hint_undo,
            "hint_undo_all" => &self.hint_undo_all,
            "hint_bgcolor" => &self.hint_bgcolor,
            "hint_fgcolor" => &self.hint_fgcolor,
            "hint_font" => &self.hint_font,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Look up an integer option by its settings name
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match name {
            "hint_size" => Some(self.hint_size.into()),
            "hint2_size" => Some(self.hint2_size.into()),
            "hint2_gap_size" => Some(self.hint2_gap_size.into()),
            "hint2_grid_size" => Some(self.hint2_grid_size.into()),
            "hint_border_radius" => Some(self.hint_border_radius.into()),
            _ => None,
        }
    }
}

/// Drop repeated characters, keeping first occurrences in order
fn dedup_chars(chars: &str) -> String {
    let mut seen = Vec::new();
    chars
        .chars()
        .filter(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(*c);
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let settings = HintSettings::default();
        let keys = settings.keys().unwrap();
        assert_eq!(keys.exit.as_slice().len(), 1);
        assert_eq!(keys.undo_all.as_slice()[0].to_string(), "C-u");

        let style = settings.style().unwrap();
        assert_eq!(style.background, RgbColor { r: 0, g: 255, b: 0 });
        assert_eq!(style.font, "Arial");
    }

    #[test]
    fn test_sanitize() {
        let mut settings = HintSettings {
            hint_chars: "aabbca".to_string(),
            hint_size: 4000,
            hint2_chars: String::new(),
            hint2_gap_size: -5,
            hint2_grid_size: 0,
            ..HintSettings::default()
        };
        settings.sanitize();

        assert_eq!(settings.hint_chars, "abc");
        assert_eq!(settings.hint_size, 1000);
        assert_eq!(settings.hint2_chars, DEFAULT_HINT2_CHARS);
        assert_eq!(settings.hint2_gap_size, 0);
        assert_eq!(settings.hint2_grid_size, 1);

        settings.hint2_grid_size = 50_000;
        settings.sanitize();
        assert_eq!(settings.hint2_grid_size, MAX_HINT2_GRID_SIZE);
    }

    #[test]
    fn test_bad_binding_and_color() {
        let settings = HintSettings { hint_exit: "hyper".to_string(), ..HintSettings::default() };
        assert!(settings.keys().is_err());

        let settings = HintSettings { hint_bgcolor: "green".to_string(), ..HintSettings::default() };
        assert!(matches!(settings.style(), Err(HintError::Config(_))));
    }

    #[test]
    fn test_named_lookup() {
        let settings = HintSettings::default();
        assert_eq!(settings.get_str("hint_chars"), Some(DEFAULT_HINT_CHARS));
        assert_eq!(settings.get_int("hint2_grid_size"), Some(3));
        assert_eq!(settings.get_int("hint_chars"), None);
        assert_eq!(settings.get_str("nope"), None);
    }
}
