//! Platform capability interface
//!
//! Everything that touches the display server, the keyboard or the pointer
//! goes through [`Platform`]. The selection loop only ever calls these
//! methods, so any backend (X11, Wayland, macOS, or the in-memory
//! [`headless::HeadlessPlatform`]) can drive it.

pub mod headless;

use crate::config::HintStyle;
use crate::error::{PlatformError, Result};
use crate::hint::multiscreen::ScreenGeometry;
use crate::hint::{Hint, ScreenId};
use crate::keyboard::{InputEvent, KeyBinding};

pub type PlatformResult<T> = std::result::Result<T, PlatformError>;

/// Capabilities the hint core needs from its host
pub trait Platform {
    /// Configure hint colors, corner radius and font before the first draw
    fn init_hint(&mut self, _style: &HintStyle) -> PlatformResult<()> {
        Ok(())
    }

    /// All screens, in a stable order for the duration of a session
    fn screens(&self) -> Vec<ScreenId>;

    /// Width and height of a screen in pixels
    fn screen_dimensions(&self, screen: ScreenId) -> PlatformResult<(i32, i32)>;

    /// Remove every hint overlay from a screen
    fn screen_clear(&mut self, screen: ScreenId) -> PlatformResult<()>;

    /// Render hints on a screen
    fn hint_draw(&mut self, screen: ScreenId, hints: &[Hint]) -> PlatformResult<()>;

    /// Flush pending clears and draws so they become visible at once
    fn commit(&mut self) -> PlatformResult<()>;

    fn input_grab_keyboard(&mut self) -> PlatformResult<()>;

    fn input_ungrab_keyboard(&mut self) -> PlatformResult<()>;

    /// Restrict which bound actions are recognized while the keyboard is
    /// grabbed; literal character keys always pass
    fn input_allowlist(&mut self, _bindings: &[KeyBinding]) -> PlatformResult<()> {
        Ok(())
    }

    /// Block until the next key press or release
    fn input_next_event(&mut self) -> PlatformResult<InputEvent>;

    /// Name of the key event, e.g. `a` or `esc`; `None` when the key has no
    /// name on this platform
    fn input_event_str(&self, event: &InputEvent) -> Option<String> {
        Some(event.name())
    }

    fn mouse_hide(&mut self) -> PlatformResult<()>;

    fn mouse_show(&mut self) -> PlatformResult<()>;

    /// Warp the pointer to a screen-local position
    fn mouse_move(&mut self, screen: ScreenId, x: i32, y: i32) -> PlatformResult<()>;

    /// Current pointer screen and screen-local position
    fn mouse_position(&self) -> PlatformResult<(ScreenId, i32, i32)>;
}

/// Handles and dimensions for every screen the platform reports
pub fn screen_geometries<P: Platform + ?Sized>(platform: &P) -> Result<Vec<ScreenGeometry>> {
    platform
        .screens()
        .into_iter()
        .map(|id| -> Result<ScreenGeometry> {
            let (width, height) = platform.screen_dimensions(id)?;
            Ok(ScreenGeometry { id, width, height })
        })
        .collect()
}
