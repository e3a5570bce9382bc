//! Hints - labeled rectangular targets
//!
//! A hint set is generated fresh for every selection session, either as a
//! grid over the available screens or from an alternate source (history,
//! external program), and is discarded when the session ends.

pub mod grid;
pub mod labels;
pub mod multiscreen;

use serde::{Deserialize, Serialize};

/// Upper bound on the number of hints in one set
pub const MAX_HINTS: usize = 2048;

/// Longest label a hint may carry
pub const MAX_LABEL_LEN: usize = 15;

/// Opaque handle for one display surface, stable for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScreenId(pub usize);

/// A labeled target rectangle in screen-local pixel coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Left edge (may be negative when a grid overflows its screen)
    pub x: i32,
    /// Top edge
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// The label the user types to select this hint
    pub label: String,
}

impl Hint {
    pub fn new(x: i32, y: i32, w: i32, h: i32, label: impl Into<String>) -> Self {
        Self { x, y, w, h, label: label.into() }
    }

    /// Build a hint of the given size whose center is `(cx, cy)`
    pub fn centered_at(cx: i32, cy: i32, w: i32, h: i32, label: impl Into<String>) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h, label)
    }

    /// Geometric center, rounded toward the top-left
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn matches(&self, prefix: &str) -> bool {
        self.label.starts_with(prefix)
    }
}

/// Ordered hints plus the screen each one belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintSet {
    hints: Vec<Hint>,
    screens: Vec<ScreenId>,
}

impl HintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap hints that all live on one screen, truncating at `MAX_HINTS`
    pub fn single(screen: ScreenId, mut hints: Vec<Hint>) -> Self {
        hints.truncate(MAX_HINTS);
        let screens = vec![screen; hints.len()];
        Self { hints, screens }
    }

    /// Append a hint; returns `false` (and drops it) once the set is full
    pub fn push(&mut self, hint: Hint, screen: ScreenId) -> bool {
        if self.is_full() {
            return false;
        }
        self.hints.push(hint);
        self.screens.push(screen);
        true
    }

    pub fn is_full(&self) -> bool {
        self.hints.len() >= MAX_HINTS
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn get(&self, index: usize) -> Option<(&Hint, ScreenId)> {
        self.hints.get(index).map(|h| (h, self.screens[index]))
    }

    /// Screen the hint at `index` was generated for
    pub fn screen_of(&self, index: usize) -> Option<ScreenId> {
        self.screens.get(index).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.hints.iter().map(|h| h.label.as_str())
    }

    /// Indices of hints whose label starts with `prefix`, in set order
    pub fn filter_by_prefix(&self, prefix: &str) -> Vec<usize> {
        self.hints
            .iter()
            .enumerate()
            .filter_map(|(i, hint)| hint.matches(prefix).then_some(i))
            .collect()
    }

    /// Hints at `indices` that belong to `screen`, cloned for drawing
    pub fn subset_on(&self, indices: &[usize], screen: ScreenId) -> Vec<Hint> {
        indices
            .iter()
            .filter(|&&i| self.screens[i] == screen)
            .map(|&i| self.hints[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&str]) -> HintSet {
        let hints = labels
            .iter()
            .enumerate()
            .map(|(i, l)| Hint::new(i as i32 * 10, 0, 10, 10, *l))
            .collect();
        HintSet::single(ScreenId(0), hints)
    }

    #[test]
    fn test_filter_by_prefix() {
        let hints = set(&["aa", "ab", "ba"]);
        assert_eq!(hints.filter_by_prefix("a"), vec![0, 1]);
        assert_eq!(hints.filter_by_prefix("ab"), vec![1]);
        assert_eq!(hints.filter_by_prefix("c"), Vec::<usize>::new());
        assert_eq!(hints.filter_by_prefix(""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_keeps_insertion_order() {
        let hints = set(&["ba", "ab", "aa"]);
        assert_eq!(hints.filter_by_prefix("a"), vec![1, 2]);
    }

    #[test]
    fn test_extending_prefix_never_grows_match() {
        let hints = set(&["aa", "ab", "ac", "ba", "bb"]);
        let mut prefix = String::new();
        let mut previous = hints.filter_by_prefix(&prefix).len();
        for c in ['a', 'b'] {
            prefix.push(c);
            let now = hints.filter_by_prefix(&prefix).len();
            assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn test_center_and_centered_at() {
        let hint = Hint::new(10, 20, 30, 40, "a");
        assert_eq!(hint.center(), (25, 40));

        let odd = Hint::centered_at(100, 100, 21, 21, "b");
        assert_eq!((odd.x, odd.y), (90, 90));
        assert_eq!(odd.center(), (100, 100));
    }

    #[test]
    fn test_push_stops_at_capacity() {
        let mut hints = HintSet::new();
        for i in 0..MAX_HINTS {
            assert!(hints.push(Hint::new(0, 0, 1, 1, i.to_string()), ScreenId(0)));
        }
        assert!(hints.is_full());
        assert!(!hints.push(Hint::new(0, 0, 1, 1, "extra"), ScreenId(0)));
        assert_eq!(hints.len(), MAX_HINTS);
    }

    #[test]
    fn test_subset_on_screen() {
        let mut hints = HintSet::new();
        hints.push(Hint::new(0, 0, 1, 1, "aa"), ScreenId(0));
        hints.push(Hint::new(0, 0, 1, 1, "ab"), ScreenId(1));
        hints.push(Hint::new(0, 0, 1, 1, "ac"), ScreenId(1));

        let matched = hints.filter_by_prefix("a");
        let on_second: Vec<String> = hints
            .subset_on(&matched, ScreenId(1))
            .into_iter()
            .map(|h| h.label)
            .collect();
        assert_eq!(on_second, vec!["ab", "ac"]);
        assert_eq!(hints.screen_of(0), Some(ScreenId(0)));
        assert_eq!(hints.get(2).map(|(h, s)| (h.label.as_str(), s)), Some(("ac", ScreenId(1))));
    }
}
