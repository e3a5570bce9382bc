//! Hint selection - the interactive narrowing loop
//!
//! A [`SelectionSession`] owns one hint set for the duration of one
//! selection. It renders the hints, reads key events, keeps the typed prefix,
//! filters hints by that prefix and warps the pointer once exactly one hint
//! is left.

pub mod input;

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::config::HintKeys;
use crate::error::Result;
use crate::hint::{Hint, HintSet, ScreenId};
use crate::platform::Platform;

use input::KeyAction;

/// Longest prefix the user can type
pub const PREFIX_CAPACITY: usize = 31;

/// Typed prefix of the most recent successful selection
///
/// Only a resolved session writes it; cancellation and dead ends leave the
/// previous value in place.
#[derive(Debug, Default)]
pub struct LastSelected {
    label: Mutex<String>,
}

impl LastSelected {
    pub const fn new() -> Self {
        Self { label: Mutex::new(String::new()) }
    }

    pub fn get(&self) -> String {
        self.label.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, typed: &str) {
        let mut last = self.label.lock().unwrap_or_else(PoisonError::into_inner);
        last.clear();
        last.push_str(typed);
    }
}

/// Process-wide store used by sessions unless told otherwise
static LAST_SELECTED: LastSelected = LastSelected::new();

/// Typed prefix of the most recent successful selection in this process
pub fn last_selected_label() -> String {
    LAST_SELECTED.get()
}

/// Bounded buffer of typed label characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixBuffer {
    text: String,
}

impl PrefixBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character; returns `false` if the buffer is already full
    pub fn push(&mut self, c: char) -> bool {
        if self.len() >= PREFIX_CAPACITY {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove the last character; returns `false` if the buffer was empty
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// How a session treats a prefix that matches nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroMatchPolicy {
    /// End the session without a selection (single-screen sources)
    Fail,
    /// Keep waiting for undo or more keys (multi-screen grid)
    KeepWaiting,
}

/// A successfully selected hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    /// Full label of the selected hint
    pub label: String,
    /// What the user typed to reach it
    pub typed: String,
    pub screen: ScreenId,
    /// Pointer target (the hint center), screen-local
    pub x: i32,
    pub y: i32,
}

/// Outcome of a selection session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exactly one hint matched and the pointer was moved to it
    Resolved(Resolved),
    /// The user pressed the exit key
    Cancelled,
    /// The prefix matched no hint (single-screen sessions only)
    NoMatch,
}

impl Selection {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Selection::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&Resolved> {
        match self {
            Selection::Resolved(r) => Some(r),
            _ => None,
        }
    }
}

/// Effect of one key action on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing changed, wait for the next event without redrawing
    Ignored,
    /// The prefix may have changed, redraw and evaluate
    Redraw,
    /// End the session
    Cancel,
}

/// Match count after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Exactly one hint left, at this index in the hint set
    Unique(usize),
    Empty,
    /// More than one hint left
    Ambiguous(usize),
}

/// State of one interactive selection
#[derive(Debug)]
pub struct SelectionSession {
    hints: HintSet,
    policy: ZeroMatchPolicy,
    /// Screens that get cleared and drawn; `None` means every platform screen
    screens: Option<Vec<ScreenId>>,
    prefix: PrefixBuffer,
    matched: Vec<usize>,
    last_selected: &'static LastSelected,
}

impl SelectionSession {
    /// Session over hints on a single screen; a dead-end prefix ends it
    pub fn single(screen: ScreenId, hints: Vec<Hint>) -> Self {
        Self::new(HintSet::single(screen, hints), ZeroMatchPolicy::Fail, Some(vec![screen]))
    }

    /// Session over a hint set spanning all screens; a dead-end prefix is
    /// tolerated until the user undoes it
    pub fn multiscreen(hints: HintSet) -> Self {
        Self::new(hints, ZeroMatchPolicy::KeepWaiting, None)
    }

    fn new(hints: HintSet, policy: ZeroMatchPolicy, screens: Option<Vec<ScreenId>>) -> Self {
        let matched = (0..hints.len()).collect();
        Self {
            hints,
            policy,
            screens,
            prefix: PrefixBuffer::new(),
            matched,
            last_selected: &LAST_SELECTED,
        }
    }

    /// Record successful selections in `store` instead of the process-wide one
    pub fn with_last_selected(mut self, store: &'static LastSelected) -> Self {
        self.last_selected = store;
        self
    }

    pub fn hints(&self) -> &HintSet {
        &self.hints
    }

    pub fn policy(&self) -> ZeroMatchPolicy {
        self.policy
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Indices of the hints matching the current prefix
    pub fn matched(&self) -> &[usize] {
        &self.matched
    }

    pub fn matched_hints(&self) -> impl Iterator<Item = &Hint> {
        self.matched.iter().map(|&i| &self.hints.hints()[i])
    }

    /// Apply a key action to the prefix buffer
    pub fn apply(&mut self, action: KeyAction) -> Step {
        match action {
            KeyAction::Exit => Step::Cancel,
            KeyAction::UndoAll => {
                self.prefix.clear();
                Step::Redraw
            }
            KeyAction::Undo => {
                self.prefix.pop();
                Step::Redraw
            }
            KeyAction::Append(c) => {
                if self.prefix.push(c) {
                    Step::Redraw
                } else {
                    log::debug!("Prefix buffer full, ignoring '{}'", c);
                    Step::Ignored
                }
            }
            KeyAction::Ignore => Step::Ignored,
        }
    }

    /// Recompute the matched hints from the current prefix
    pub fn refilter(&mut self) {
        self.matched = self.hints.filter_by_prefix(self.prefix.as_str());
    }

    pub fn verdict(&self) -> Verdict {
        match self.matched.as_slice() {
            [] => Verdict::Empty,
            [only] => Verdict::Unique(*only),
            many => Verdict::Ambiguous(many.len()),
        }
    }

    /// Run the session to completion
    ///
    /// The keyboard is grabbed and the cursor hidden for the duration; both
    /// are restored and all overlays cleared however the session ends.
    pub fn run<P: Platform + ?Sized>(mut self, platform: &mut P, keys: &HintKeys) -> Result<Selection> {
        let screens = match self.screens.take() {
            Some(screens) => screens,
            None => platform.screens(),
        };

        log::info!(
            "Hint selection: {} hints on {} screen(s), zero match policy {:?}",
            self.hints.len(),
            screens.len(),
            self.policy
        );

        let outcome = self.event_loop(platform, keys, &screens);
        let teardown = Self::teardown(platform, &screens);

        let selection = outcome?;
        teardown?;

        match &selection {
            Selection::Resolved(r) => log::info!(
                "Selected '{}' on screen {:?} at ({}, {})",
                r.label,
                r.screen,
                r.x,
                r.y
            ),
            Selection::Cancelled => log::info!("Hint selection cancelled"),
            Selection::NoMatch => log::info!("No hint matches '{}'", self.prefix.as_str()),
        }
        Ok(selection)
    }

    fn event_loop<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        keys: &HintKeys,
        screens: &[ScreenId],
    ) -> Result<Selection> {
        self.refilter();
        self.render(platform, screens)?;

        platform.input_grab_keyboard()?;
        platform.mouse_hide()?;
        platform.input_allowlist(&input::allowlist(keys))?;

        loop {
            let event = platform.input_next_event()?;
            let name = platform.input_event_str(&event);
            let action = input::classify(&event, keys, name.as_deref());

            match self.apply(action) {
                Step::Ignored => continue,
                Step::Cancel => return Ok(Selection::Cancelled),
                Step::Redraw => {}
            }
            log::debug!("Hint prefix now '{}'", self.prefix.as_str());

            self.refilter();
            self.render(platform, screens)?;

            match self.verdict() {
                Verdict::Unique(index) => return self.resolve(platform, screens, index),
                Verdict::Empty if self.policy == ZeroMatchPolicy::Fail => {
                    return Ok(Selection::NoMatch);
                }
                Verdict::Empty | Verdict::Ambiguous(_) => {}
            }
        }
    }

    /// Clear every screen, draw the matched hints on their screens, commit
    fn render<P: Platform + ?Sized>(&self, platform: &mut P, screens: &[ScreenId]) -> Result<()> {
        for &screen in screens {
            platform.screen_clear(screen)?;
        }

        for &screen in screens {
            let visible = self.hints.subset_on(&self.matched, screen);
            if !visible.is_empty() {
                platform.hint_draw(screen, &visible)?;
            }
        }

        platform.commit()?;
        Ok(())
    }

    fn resolve<P: Platform + ?Sized>(
        &self,
        platform: &mut P,
        screens: &[ScreenId],
        index: usize,
    ) -> Result<Selection> {
        let Some((hint, screen)) = self.hints.get(index) else {
            return Ok(Selection::NoMatch);
        };

        for &s in screens {
            platform.screen_clear(s)?;
        }

        let (x, y) = hint.center();

        // Wiggle by one pixel so widgets that ignore a bare warp see motion
        platform.mouse_move(screen, x + 1, y + 1)?;
        platform.mouse_move(screen, x, y)?;

        self.last_selected.record(self.prefix.as_str());

        Ok(Selection::Resolved(Resolved {
            label: hint.label.clone(),
            typed: self.prefix.as_str().to_string(),
            screen,
            x,
            y,
        }))
    }

    fn teardown<P: Platform + ?Sized>(platform: &mut P, screens: &[ScreenId]) -> Result<()> {
        platform.input_ungrab_keyboard()?;
        for &screen in screens {
            platform.screen_clear(screen)?;
        }
        platform.mouse_show()?;
        platform.commit()?;
        Ok(())
    }
}
