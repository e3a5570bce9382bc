//! Color and style types for hint rendering

use serde::{Deserialize, Serialize};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for RgbColor {
    fn default() -> Self {
        Self { r: 128, g: 128, b: 128 }
    }
}

impl RgbColor {
    /// Parse `#rrggbb` or `#rgb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match digits.len() {
            6 => Some(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self { r: expand(0)?, g: expand(1)?, b: expand(2)? })
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolved hint appearance handed to the platform before drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStyle {
    pub background: RgbColor,
    pub foreground: RgbColor,
    pub border_radius: u32,
    pub font: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RgbColor::from_hex("#00ff00"), Some(RgbColor { r: 0, g: 255, b: 0 }));
        assert_eq!(RgbColor::from_hex("ffcc00"), Some(RgbColor { r: 255, g: 204, b: 0 }));
        assert_eq!(RgbColor::from_hex("#fff"), Some(RgbColor { r: 255, g: 255, b: 255 }));
        assert_eq!(RgbColor::from_hex("#12345"), None);
        assert_eq!(RgbColor::from_hex("#gggggg"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor { r: 255, g: 204, b: 0 }.to_hex(), "#ffcc00");
    }
}
