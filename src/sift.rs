//! Refinement pass
//!
//! After a coarse selection, a small square grid of single-character hints
//! is laid out around the pointer so the user can nudge it to a nearby spot.
//! Sizes are per mille of the screen height.

use crate::config::{HintKeys, HintSettings};
use crate::error::Result;
use crate::hint::Hint;
use crate::platform::Platform;
use crate::selection::{Selection, SelectionSession};

/// Build the refinement grid around `(px, py)` on a screen `screen_h` pixels tall
pub fn sift_hints(settings: &HintSettings, screen_h: i32, px: i32, py: i32) -> Vec<Hint> {
    let chars: Vec<char> = settings.hint2_chars.chars().collect();
    let grid = settings.hint2_grid_size.max(0);

    let gap = settings.hint2_gap_size * screen_h / 1000;
    let size = settings.hint2_size * screen_h / 1000;
    let step = size + gap;

    let span = (size + (gap - 1)).saturating_mul(grid) / 2;
    let x = px.saturating_sub(span);
    let y = py.saturating_sub(span);

    // Cells whose row-major index is past the alphabet never get a label
    let grid_len = usize::try_from(grid).unwrap_or(0);
    let cols = grid_len.min(chars.len());
    let rows = match grid_len {
        0 => 0,
        n => n.min(chars.len().div_ceil(n)),
    };
    let offset = |i: usize| step.saturating_mul(i32::try_from(i).unwrap_or(i32::MAX));

    let mut hints = Vec::new();
    for col in 0..cols {
        for row in 0..rows {
            // Labels run row-major even though cells are emitted column by column
            let Some(&c) = chars.get(row * grid_len + col) else {
                continue;
            };
            hints.push(Hint::new(
                x.saturating_add(offset(col)),
                y.saturating_add(offset(row)),
                size,
                size,
                c.to_string(),
            ));
        }
    }
    hints
}

/// Run the refinement pass on the screen the pointer is on
pub fn sift<P: Platform + ?Sized>(platform: &mut P, settings: &HintSettings, keys: &HintKeys) -> Result<Selection> {
    let (screen, px, py) = platform.mouse_position()?;
    let (_, screen_h) = platform.screen_dimensions(screen)?;

    let hints = sift_hints(settings, screen_h, px, py);
    log::debug!("Sift: {} hints around ({}, {}) on {:?}", hints.len(), px, py, screen);

    SelectionSession::single(screen, hints).run(platform, keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::ScreenId;
    use crate::platform::headless::HeadlessPlatform;

    fn settings(chars: &str, size: i32, gap: i32, grid: i32) -> HintSettings {
        HintSettings {
            hint2_chars: chars.to_string(),
            hint2_size: size,
            hint2_gap_size: gap,
            hint2_grid_size: grid,
            ..HintSettings::default()
        }
    }

    #[test]
    fn test_grid_labels_are_row_major() {
        let hints = sift_hints(&settings("abcdefghi", 20, 10, 3), 1000, 500, 500);
        assert_eq!(hints.len(), 9);

        let at = |label: &str| hints.iter().find(|h| h.label == label).unwrap();
        // size 20, gap 10, origin 500 - ((20 + 9) * 3) / 2 = 457
        assert_eq!((at("a").x, at("a").y), (457, 457));
        assert_eq!((at("b").x, at("b").y), (487, 457));
        assert_eq!((at("d").x, at("d").y), (457, 487));
        assert_eq!((at("i").x, at("i").y), (517, 517));
        assert!(hints.iter().all(|h| h.w == 20 && h.h == 20));
    }

    #[test]
    fn test_emission_is_column_major() {
        let hints = sift_hints(&settings("abcd", 20, 10, 2), 1000, 100, 100);
        let labels: Vec<&str> = hints.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_truncated_at_alphabet_length() {
        let hints = sift_hints(&settings("abcde", 20, 10, 3), 1000, 100, 100);
        let mut labels: Vec<&str> = hints.iter().map(|h| h.label.as_str()).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_oversized_grid_only_walks_labelled_cells() {
        let mut huge = settings("hjkl", 20, 1, 50_000);
        huge.sanitize();
        let hints = sift_hints(&huge, 1000, 500, 500);
        assert_eq!(hints.len(), 4);

        let unbounded = settings("abc", 20, 1, i32::MAX);
        let hints = sift_hints(&unbounded, 1000, 500, 500);
        let labels: Vec<&str> = hints.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert!(hints.iter().all(|h| h.y == hints[0].y));
    }

    #[test]
    fn test_sizes_follow_screen_height() {
        let tall = sift_hints(&settings("ab", 50, 0, 1), 2000, 0, 0);
        let short = sift_hints(&settings("ab", 50, 0, 1), 1000, 0, 0);
        assert_eq!(tall[0].w, 100);
        assert_eq!(short[0].w, 50);
    }

    #[test]
    fn test_sift_moves_around_pointer() {
        let mut platform = HeadlessPlatform::new(vec![(1920, 1080), (1000, 1000)])
            .with_pointer(ScreenId(1), 500, 500);
        platform.push_keys("i").unwrap();

        let settings = settings("abcdefghi", 20, 10, 3);
        let keys = settings.keys().unwrap();
        let selection = sift(&mut platform, &settings, &keys).unwrap();

        let resolved = selection.resolved().unwrap();
        assert_eq!(resolved.screen, ScreenId(1));
        assert_eq!((resolved.x, resolved.y), (527, 527));
    }
}
