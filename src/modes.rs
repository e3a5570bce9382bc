//! Hint modes - the entry points a front end invokes
//!
//! Each mode builds a hint set from one source and runs a selection session
//! over it. Full-screen mode can chain into the refinement pass.

use std::io::Read;

use crate::config::HintSettings;
use crate::error::{HintError, Result};
use crate::hint::grid::hint_box_size;
use crate::hint::multiscreen::generate_multiscreen_hints;
use crate::platform::{screen_geometries, Platform};
use crate::selection::{Selection, SelectionSession};
use crate::sift::sift;
use crate::sources::{history_hints, hintspec_hints, read_hint_specs, PositionHistory};

/// Which mode to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMode {
    /// Grid over every screen, optionally followed by the refinement pass
    Full { sift: bool },
    /// One hint per recorded pointer position
    History,
    /// Hints read from an external `label x y` stream
    HintSpec,
    /// Refinement grid around the pointer only
    Sift,
}

impl HintMode {
    pub fn name(&self) -> &'static str {
        match self {
            HintMode::Full { sift: false } => "full",
            HintMode::Full { sift: true } => "full+sift",
            HintMode::History => "history",
            HintMode::HintSpec => "hintspec",
            HintMode::Sift => "sift",
        }
    }
}

/// Hand the configured hint appearance to the platform
pub fn init_hints<P: Platform + ?Sized>(platform: &mut P, settings: &HintSettings) -> Result<()> {
    let style = settings.style()?;
    platform.init_hint(&style)?;
    Ok(())
}

/// Run `mode`, reading hint specs from `input` when the mode needs them
pub fn run_mode<P, H, R>(
    mode: HintMode,
    platform: &mut P,
    settings: &HintSettings,
    history: &mut H,
    input: R,
) -> Result<Selection>
where
    P: Platform + ?Sized,
    H: PositionHistory + ?Sized,
    R: Read,
{
    log::info!("Running {} hint mode", mode.name());
    match mode {
        HintMode::Full { sift } => full_hint_mode(platform, settings, history, sift),
        HintMode::History => history_hint_mode(platform, settings, history),
        HintMode::HintSpec => hintspec_mode(platform, settings, input),
        HintMode::Sift => sift_mode(platform, settings),
    }
}

/// Grid hints over all screens; on success optionally refine with a sift pass
pub fn full_hint_mode<P, H>(
    platform: &mut P,
    settings: &HintSettings,
    history: &mut H,
    second_pass: bool,
) -> Result<Selection>
where
    P: Platform + ?Sized,
    H: PositionHistory + ?Sized,
{
    let keys = settings.keys()?;

    let (screen, mx, my) = platform.mouse_position()?;
    if let Err(e) = history.add(mx, my) {
        log::warn!("Failed to record pointer position ({}, {}) on {:?}: {}", mx, my, screen, e);
    }

    let screens = screen_geometries(platform)?;
    if screens.is_empty() {
        return Err(HintError::NoScreens);
    }

    let hints = generate_multiscreen_hints(&screens, &settings.hint_chars, settings.hint_size);
    let selection = SelectionSession::multiscreen(hints).run(platform, &keys)?;

    if !second_pass || !selection.is_resolved() {
        return Ok(selection);
    }
    sift(platform, settings, &keys)
}

/// Hints on the recorded pointer positions, on the pointer's screen
pub fn history_hint_mode<P, H>(platform: &mut P, settings: &HintSettings, history: &H) -> Result<Selection>
where
    P: Platform + ?Sized,
    H: PositionHistory + ?Sized,
{
    let keys = settings.keys()?;

    let (screen, _, _) = platform.mouse_position()?;
    let (sw, sh) = platform.screen_dimensions(screen)?;
    let (w, h) = hint_box_size(sw, sh, settings.hint_size);

    let entries = history.read()?;
    log::debug!("History mode: {} entries", entries.len());

    let hints = history_hints(&entries, w, h);
    SelectionSession::single(screen, hints).run(platform, &keys)
}

/// Hints read from `input`, on the pointer's screen
pub fn hintspec_mode<P, R>(platform: &mut P, settings: &HintSettings, input: R) -> Result<Selection>
where
    P: Platform + ?Sized,
    R: Read,
{
    let keys = settings.keys()?;

    let (screen, _, _) = platform.mouse_position()?;
    let (sw, sh) = platform.screen_dimensions(screen)?;
    let (w, h) = hint_box_size(sw, sh, settings.hint_size);

    let specs = read_hint_specs(input)?;
    log::debug!("Hint spec mode: {} records", specs.len());

    let hints = hintspec_hints(&specs, w, h);
    SelectionSession::single(screen, hints).run(platform, &keys)
}

/// The refinement pass on its own
pub fn sift_mode<P: Platform + ?Sized>(platform: &mut P, settings: &HintSettings) -> Result<Selection> {
    let keys = settings.keys()?;
    sift(platform, settings, &keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::ScreenId;
    use crate::platform::headless::{HeadlessPlatform, PlatformCall};
    use crate::sources::{HistoryEntry, MemoryHistory};

    fn settings(chars: &str) -> HintSettings {
        HintSettings {
            hint_chars: chars.to_string(),
            hint_size: 100,
            ..HintSettings::default()
        }
    }

    #[test]
    fn test_full_mode_records_history_and_resolves() {
        let mut platform = HeadlessPlatform::new(vec![(400, 400)]).with_pointer(ScreenId(0), 7, 8);
        platform.push_keys("bb").unwrap();
        let mut history = MemoryHistory::new();

        let selection = full_hint_mode(&mut platform, &settings("ab"), &mut history, false).unwrap();
        let resolved = selection.resolved().unwrap();
        assert_eq!(resolved.label, "bb");
        // box 40, gap 160, offset 80: cell (280, 280) centered at (300, 300)
        assert_eq!((resolved.x, resolved.y), (300, 300));
        assert_eq!(history.read().unwrap(), vec![HistoryEntry { x: 7, y: 8 }]);
    }

    #[test]
    fn test_full_mode_two_screens_three_char_labels() {
        let mut platform = HeadlessPlatform::new(vec![(400, 400), (800, 800)]);
        platform.push_keys("baa").unwrap();
        let mut history = MemoryHistory::new();

        let selection = full_hint_mode(&mut platform, &settings("ab"), &mut history, false).unwrap();
        let resolved = selection.resolved().unwrap();
        assert_eq!(resolved.label, "baa");
        assert_eq!(resolved.screen, ScreenId(1));
        // box 80, gap 320, offset 160: first cell centered at (200, 200)
        assert_eq!((resolved.x, resolved.y), (200, 200));
    }

    #[test]
    fn test_full_mode_chains_into_sift() {
        let mut platform = HeadlessPlatform::new(vec![(1000, 1000)]);
        platform.push_keys("aa h").unwrap();
        let mut history = MemoryHistory::new();

        let settings = HintSettings {
            hint2_chars: "hjkl".to_string(),
            hint2_grid_size: 2,
            ..settings("ab")
        };
        let selection = full_hint_mode(&mut platform, &settings, &mut history, true).unwrap();
        assert_eq!(selection.resolved().map(|r| r.label.as_str()), Some("h"));
        assert_eq!(platform.moves().len(), 4);
    }

    #[test]
    fn test_full_mode_cancel_skips_sift() {
        let mut platform = HeadlessPlatform::new(vec![(1000, 1000)]);
        platform.push_keys("esc h").unwrap();
        let mut history = MemoryHistory::new();

        let selection = full_hint_mode(&mut platform, &settings("ab"), &mut history, true).unwrap();
        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(platform.remaining_events(), 3);
    }

    #[test]
    fn test_full_mode_without_screens() {
        let mut platform = HeadlessPlatform::new(vec![]);
        let mut history = MemoryHistory::new();
        let result = full_hint_mode(&mut platform, &settings("ab"), &mut history, false);
        assert!(matches!(result, Err(HintError::NoScreens)));
    }

    #[test]
    fn test_history_mode() {
        let mut platform = HeadlessPlatform::new(vec![(1000, 500)]);
        platform.push_keys("c").unwrap();
        let mut history = MemoryHistory::new();
        for (x, y) in [(10, 10), (200, 300), (640, 480)] {
            history.add(x, y).unwrap();
        }

        let selection = history_hint_mode(&mut platform, &settings("ab"), &history).unwrap();
        let resolved = selection.resolved().unwrap();
        assert_eq!(resolved.label, "c");
        assert_eq!((resolved.x, resolved.y), (640, 480));
    }

    #[test]
    fn test_history_mode_empty_fails_on_first_key() {
        let mut platform = HeadlessPlatform::new(vec![(1000, 500)]);
        platform.push_keys("a").unwrap();
        let history = MemoryHistory::new();

        let selection = history_hint_mode(&mut platform, &settings("ab"), &history).unwrap();
        assert_eq!(selection, Selection::NoMatch);
    }

    #[test]
    fn test_hintspec_mode() {
        let mut platform = HeadlessPlatform::new(vec![(1000, 500)]);
        platform.push_keys("q").unwrap();

        let input = "ok 10 10 q 300 200 bad";
        let selection = hintspec_mode(&mut platform, &settings("ab"), input.as_bytes()).unwrap();
        let resolved = selection.resolved().unwrap();
        assert_eq!((resolved.x, resolved.y), (300, 200));
    }

    #[test]
    fn test_run_mode_dispatch_and_init() {
        let mut platform = HeadlessPlatform::new(vec![(1000, 1000)]);
        platform.push_keys("esc").unwrap();
        let mut history = MemoryHistory::new();
        let settings = HintSettings::default();

        init_hints(&mut platform, &settings).unwrap();
        assert_eq!(platform.calls()[0], PlatformCall::InitHint);
        assert_eq!(platform.style().map(|s| s.border_radius), Some(3));

        let selection = run_mode(HintMode::Sift, &mut platform, &settings, &mut history, std::io::empty()).unwrap();
        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(HintMode::Full { sift: true }.name(), "full+sift");
    }
}
