//! In-memory platform backend
//!
//! Screens, pointer and keyboard input are simulated; every capability call
//! is recorded so callers can inspect exactly what a session did. Used by the
//! test suites and by the command-line simulator.

use std::collections::{BTreeMap, VecDeque};

use super::{Platform, PlatformResult};
use crate::config::HintStyle;
use crate::error::{HintError, PlatformError};
use crate::hint::{Hint, ScreenId};
use crate::keyboard::{InputEvent, KeyBinding, KeyCode, Modifiers};

/// One recorded capability call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    InitHint,
    ScreenClear(ScreenId),
    /// Labels of the hints drawn, in draw order
    HintDraw(ScreenId, Vec<String>),
    Commit,
    GrabKeyboard,
    UngrabKeyboard,
    Allowlist(Vec<String>),
    MouseHide,
    MouseShow,
    MouseMove(ScreenId, i32, i32),
}

/// Scripted platform with fixed screens and a queue of key events
#[derive(Debug)]
pub struct HeadlessPlatform {
    screens: Vec<(i32, i32)>,
    pointer: (ScreenId, i32, i32),
    events: VecDeque<InputEvent>,
    calls: Vec<PlatformCall>,
    pending: BTreeMap<ScreenId, Vec<Hint>>,
    visible: BTreeMap<ScreenId, Vec<Hint>>,
    style: Option<HintStyle>,
    grabbed: bool,
    cursor_visible: bool,
}

impl HeadlessPlatform {
    /// Create a platform with one screen per `(width, height)` entry; the
    /// pointer starts at the center of the first screen
    pub fn new(screens: Vec<(i32, i32)>) -> Self {
        let pointer = screens
            .first()
            .map(|&(w, h)| (ScreenId(0), w / 2, h / 2))
            .unwrap_or((ScreenId(0), 0, 0));

        Self {
            screens,
            pointer,
            events: VecDeque::new(),
            calls: Vec::new(),
            pending: BTreeMap::new(),
            visible: BTreeMap::new(),
            style: None,
            grabbed: false,
            cursor_visible: true,
        }
    }

    pub fn with_pointer(mut self, screen: ScreenId, x: i32, y: i32) -> Self {
        self.pointer = (screen, x, y);
        self
    }

    /// Queue a raw event
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Queue a press and release for the given key
    pub fn push_key(&mut self, code: KeyCode, modifiers: Modifiers) {
        self.push_event(InputEvent::press(code, modifiers));
        self.push_event(InputEvent::release(code, modifiers));
    }

    /// Queue keys from a script of whitespace-separated tokens
    ///
    /// A token is either a key binding (`esc`, `backspace`, `C-u`) or a run
    /// of characters typed one after another (`abc`). A run that spells a
    /// key name (`tab`, `end`, `home`) is sent as that key; split it into
    /// single characters (`t a b`) to type it.
    pub fn push_keys(&mut self, script: &str) -> Result<(), HintError> {
        for token in script.split_whitespace() {
            if let Some(binding) = KeyBinding::parse(token) {
                self.push_key(binding.code, binding.modifiers);
                continue;
            }

            for c in token.chars() {
                let code = KeyCode::from_char(c)
                    .ok_or_else(|| HintError::Config(format!("cannot type '{}' in key script", c)))?;
                let modifiers = Modifiers { shift: c.is_ascii_uppercase(), ..Modifiers::none() };
                self.push_key(code, modifiers);
            }
        }
        Ok(())
    }

    pub fn calls(&self) -> &[PlatformCall] {
        &self.calls
    }

    /// Every pointer warp, in order
    pub fn moves(&self) -> Vec<(ScreenId, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PlatformCall::MouseMove(s, x, y) => Some((*s, *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Hints visible on a screen as of the last commit
    pub fn visible_hints(&self, screen: ScreenId) -> &[Hint] {
        self.visible.get(&screen).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn pointer(&self) -> (ScreenId, i32, i32) {
        self.pointer
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn style(&self) -> Option<&HintStyle> {
        self.style.as_ref()
    }

    pub fn remaining_events(&self) -> usize {
        self.events.len()
    }

    fn check_screen(&self, screen: ScreenId) -> PlatformResult<(i32, i32)> {
        self.screens
            .get(screen.0)
            .copied()
            .ok_or(PlatformError::UnknownScreen(screen))
    }
}

impl Platform for HeadlessPlatform {
    fn init_hint(&mut self, style: &HintStyle) -> PlatformResult<()> {
        self.style = Some(style.clone());
        self.calls.push(PlatformCall::InitHint);
        Ok(())
    }

    fn screens(&self) -> Vec<ScreenId> {
        (0..self.screens.len()).map(ScreenId).collect()
    }

    fn screen_dimensions(&self, screen: ScreenId) -> PlatformResult<(i32, i32)> {
        self.check_screen(screen)
    }

    fn screen_clear(&mut self, screen: ScreenId) -> PlatformResult<()> {
        self.check_screen(screen)?;
        self.pending.remove(&screen);
        self.calls.push(PlatformCall::ScreenClear(screen));
        Ok(())
    }

    fn hint_draw(&mut self, screen: ScreenId, hints: &[Hint]) -> PlatformResult<()> {
        self.check_screen(screen)?;
        self.pending.entry(screen).or_default().extend_from_slice(hints);
        let labels = hints.iter().map(|h| h.label.clone()).collect();
        self.calls.push(PlatformCall::HintDraw(screen, labels));
        Ok(())
    }

    fn commit(&mut self) -> PlatformResult<()> {
        self.visible = self.pending.clone();
        self.calls.push(PlatformCall::Commit);
        Ok(())
    }

    fn input_grab_keyboard(&mut self) -> PlatformResult<()> {
        self.grabbed = true;
        self.calls.push(PlatformCall::GrabKeyboard);
        Ok(())
    }

    fn input_ungrab_keyboard(&mut self) -> PlatformResult<()> {
        self.grabbed = false;
        self.calls.push(PlatformCall::UngrabKeyboard);
        Ok(())
    }

    fn input_allowlist(&mut self, bindings: &[KeyBinding]) -> PlatformResult<()> {
        let names = bindings.iter().map(ToString::to_string).collect();
        self.calls.push(PlatformCall::Allowlist(names));
        Ok(())
    }

    fn input_next_event(&mut self) -> PlatformResult<InputEvent> {
        self.events.pop_front().ok_or(PlatformError::InputClosed)
    }

    fn mouse_hide(&mut self) -> PlatformResult<()> {
        self.cursor_visible = false;
        self.calls.push(PlatformCall::MouseHide);
        Ok(())
    }

    fn mouse_show(&mut self) -> PlatformResult<()> {
        self.cursor_visible = true;
        self.calls.push(PlatformCall::MouseShow);
        Ok(())
    }

    fn mouse_move(&mut self, screen: ScreenId, x: i32, y: i32) -> PlatformResult<()> {
        self.check_screen(screen)?;
        self.pointer = (screen, x, y);
        self.calls.push(PlatformCall::MouseMove(screen, x, y));
        Ok(())
    }

    fn mouse_position(&self) -> PlatformResult<(ScreenId, i32, i32)> {
        Ok(self.pointer)
    }
}
