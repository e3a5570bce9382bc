//! Hint label generation
//!
//! Labels are fixed-length strings enumerated over the configured alphabet in
//! alphabet order (`aa, ab, ..., ba, ...` for `"ab..."`). Because every label
//! in a batch has the same length, no label is a prefix of another.

use super::MAX_HINTS;

/// Default hint characters
pub const DEFAULT_HINT_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Position count up to which a single screen gets two-character labels
pub const TWO_CHAR_POSITION_LIMIT: usize = 676;

/// Length of every label in one generated batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelWidth {
    Two,
    Three,
}

impl LabelWidth {
    /// Pick the label width for a grid spanning `screen_count` screens with
    /// `total_positions` cells overall
    pub fn for_layout(screen_count: usize, total_positions: usize) -> Self {
        if screen_count > 1 || total_positions > TWO_CHAR_POSITION_LIMIT {
            LabelWidth::Three
        } else {
            LabelWidth::Two
        }
    }

    pub fn char_count(self) -> usize {
        match self {
            LabelWidth::Two => 2,
            LabelWidth::Three => 3,
        }
    }
}

/// Generate up to `count` labels of `width` characters over `chars`
///
/// Generation stops at whichever comes first: `count`, `MAX_HINTS`, or the
/// end of the enumeration. Labels never repeat.
pub fn generate_labels(chars: &str, width: LabelWidth, count: usize) -> Vec<String> {
    let chars: Vec<char> = chars.chars().collect();
    let limit = count.min(MAX_HINTS);
    let mut labels = Vec::with_capacity(limit);

    if chars.is_empty() || limit == 0 {
        return labels;
    }

    match width {
        LabelWidth::Two => {
            'outer: for c1 in &chars {
                for c2 in &chars {
                    if labels.len() >= limit {
                        break 'outer;
                    }
                    labels.push(format!("{}{}", c1, c2));
                }
            }
        }
        LabelWidth::Three => {
            'outer: for c1 in &chars {
                for c2 in &chars {
                    for c3 in &chars {
                        if labels.len() >= limit {
                            break 'outer;
                        }
                        labels.push(format!("{}{}{}", c1, c2, c3));
                    }
                }
            }
        }
    }

    labels
}

/// Single-character labels, one per alphabet character, up to `count`
pub fn single_char_labels(chars: &str, count: usize) -> Vec<String> {
    chars.chars().take(count.min(MAX_HINTS)).map(String::from).collect()
}
