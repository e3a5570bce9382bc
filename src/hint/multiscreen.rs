//! Hint distribution across every available screen
//!
//! Each screen gets its own grid geometry, but labels come from one shared
//! pool so a label is never reused on two screens.

use super::grid::GridLayout;
use super::labels::{generate_labels, LabelWidth};
use super::{HintSet, ScreenId};

/// A screen handle together with its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub id: ScreenId,
    pub width: i32,
    pub height: i32,
}

/// Generate grid hints for all `screens`, in screen order
///
/// Generation stops as soon as the set reaches `MAX_HINTS`, even partway
/// through a screen.
pub fn generate_multiscreen_hints(screens: &[ScreenGeometry], chars: &str, hint_size: i32) -> HintSet {
    let mut set = HintSet::new();

    let chars_len = chars.chars().count();
    let per_screen = chars_len * chars_len;
    let total_positions = per_screen * screens.len();

    let width = LabelWidth::for_layout(screens.len(), total_positions);
    let labels = generate_labels(chars, width, total_positions);
    log::debug!(
        "Generating hints: {} screens, {} positions, {} labels of width {}",
        screens.len(),
        total_positions,
        labels.len(),
        width.char_count()
    );

    let mut labels = labels.into_iter();
    for screen in screens {
        if set.is_full() {
            log::warn!("Hint capacity reached before screen {:?}", screen.id);
            break;
        }

        let Some(grid) = GridLayout::compute(screen.width, screen.height, hint_size, chars_len) else {
            break;
        };
        let placed = grid.place(screen.id, &mut labels, &mut set);
        log::debug!(
            "Screen {:?} ({}x{}): placed {} hints",
            screen.id,
            screen.width,
            screen.height,
            placed
        );
    }

    set
}
