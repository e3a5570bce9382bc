//! Grid layout for a single screen
//!
//! The grid is always `A x A` cells for an alphabet of `A` characters, with
//! square boxes sized as a per-mille fraction of the screen's longer side and
//! the leftover space split evenly into gaps around them.

use super::{Hint, HintSet, ScreenId};

/// Square hint box side for a screen, `hint_size` is per mille of the longer
/// screen side
pub fn hint_box_size(screen_w: i32, screen_h: i32, hint_size: i32) -> (i32, i32) {
    let long = screen_w.max(screen_h);
    let side = long * hint_size / 1000;
    (side, side)
}

/// Geometry of one screen's hint grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub cols: i32,
    pub rows: i32,
    pub box_w: i32,
    pub box_h: i32,
    /// Horizontal space between boxes (negative when boxes overlap)
    pub col_gap: i32,
    pub row_gap: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl GridLayout {
    /// Compute the grid for a `screen_w x screen_h` screen
    ///
    /// Returns `None` for an empty alphabet, which has no cells.
    pub fn compute(screen_w: i32, screen_h: i32, hint_size: i32, alphabet_len: usize) -> Option<Self> {
        let n = i32::try_from(alphabet_len).ok().filter(|&n| n > 0)?;
        let (box_w, box_h) = hint_box_size(screen_w, screen_h, hint_size);

        let col_gap = screen_w / n - box_w;
        let row_gap = screen_h / n - box_h;

        Some(Self {
            cols: n,
            rows: n,
            box_w,
            box_h,
            col_gap,
            row_gap,
            x_offset: col_gap / 2,
            y_offset: row_gap / 2,
        })
    }

    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Top-left corners of every cell, rows outer, columns inner
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows).flat_map(move |row| {
            let y = self.y_offset + row * (self.box_h + self.row_gap);
            (0..self.cols).map(move |col| (self.x_offset + col * (self.box_w + self.col_gap), y))
        })
    }

    /// Place one hint per cell, taking labels in order until either the cells,
    /// the labels or the set's capacity run out. Returns the number placed.
    pub fn place<I>(&self, screen: ScreenId, labels: &mut I, set: &mut HintSet) -> usize
    where
        I: Iterator<Item = String>,
    {
        let mut placed = 0;
        for (x, y) in self.cells() {
            if set.is_full() {
                break;
            }
            let Some(label) = labels.next() else {
                break;
            };
            set.push(Hint::new(x, y, self.box_w, self.box_h, label), screen);
            placed += 1;
        }
        placed
    }
}
